//! Escalating labels for the No button

/// Shown in order, one step per evade; the last one sticks
pub const NO_PHRASES: [&str; 16] = [
    "No",
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Last chance!",
    "Surely not?",
    "You might regret this!",
    "Give it another thought!",
    "Are you absolutely sure?",
    "This could be a mistake!",
    "Have a heart!",
    "Don't be so cold!",
    "Change of heart?",
    "Wouldn't you reconsider?",
    "Is that your final answer?",
    "You're breaking my heart ;(",
];

/// Label for the given evade count, saturating at the final phrase.
///
/// An empty list yields an empty label.
pub fn label_for<S: AsRef<str>>(phrases: &[S], evade_count: u32) -> &str {
    let Some(last) = phrases.len().checked_sub(1) else {
        return "";
    };
    phrases[(evade_count as usize).min(last)].as_ref()
}
