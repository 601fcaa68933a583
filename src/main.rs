//! Valentine Proposal entry point
//!
//! On the web: mounts the page and wires DOM events to the controller.
//! Natively: exports the pre-rendered static page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use valentine_proposal::PageConfig;
    use valentine_proposal::proposal::{
        ConfettiCelebration, ContainerBounds, ProposalController, ProposalEvent, ProposalPhase,
        Rect,
    };
    use valentine_proposal::view::markup::{ids, no_button_transform, transition};
    use valentine_proposal::view::{
        MountPlan, Subtree, ViewModel, mount_plan, render_page, render_scatter_hearts, render_subtree,
    };
    use valentine_proposal::viewport::{ViewportQuery, WindowViewport};

    /// Page instance holding the controller
    struct Page {
        controller: ProposalController<ConfettiCelebration>,
    }

    impl Page {
        fn new(config: PageConfig) -> Self {
            Self {
                controller: ProposalController::new(config, ConfettiCelebration, &WindowViewport),
            }
        }

        fn view(&self) -> ViewModel {
            ViewModel::build(self.controller.state(), self.controller.config())
        }

        fn subtree(&self) -> Subtree {
            ViewModel::subtree(self.controller.state(), self.controller.config())
        }

        /// Move the No button and update its label
        fn update_no_button(&self, document: &Document) {
            if let Some(btn) = document
                .get_element_by_id(ids::NO)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let transform = no_button_transform(self.controller.state().evade_position);
                let _ = btn.style().set_property("transform", &transform);
            }
            if let Some(label) = document.get_element_by_id(ids::NO_LABEL) {
                label.set_text_content(Some(self.controller.label()));
            }
        }

        /// Re-render the scatter hearts for the current viewport class
        fn update_scatter(&self, document: &Document) {
            if let Subtree::Asking(ask) = self.subtree() {
                if let Some(layer) = document.get_element_by_id(ids::SCATTER) {
                    layer.set_inner_html(&render_scatter_hearts(&ask.hearts));
                }
            }
        }
    }

    fn current_document() -> Option<Document> {
        web_sys::window()?.document()
    }

    /// Measure the card and where the No button rests inside it.
    ///
    /// Offsets ignore CSS transforms, so the resting place comes out right
    /// even while the button is mid-glide.
    fn card_bounds(document: &Document) -> Option<ContainerBounds> {
        let card = document.get_element_by_id(ids::CARD)?;
        let rect = card.get_bounding_client_rect();
        let bounds = ContainerBounds::new(rect.width() as f32, rect.height() as f32);
        let rest = document
            .get_element_by_id(ids::NO)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .and_then(|btn| rest_in_card(&btn, &card));
        match rest {
            Some(rest) => Some(bounds.with_rest(rest)),
            None => Some(bounds),
        }
    }

    /// Walk the offset-parent chain from the button up to the card
    fn rest_in_card(btn: &HtmlElement, card: &Element) -> Option<Rect> {
        let (mut left, mut top) = (0.0f32, 0.0f32);
        let mut el = btn.clone();
        loop {
            left += el.offset_left() as f32;
            top += el.offset_top() as f32;
            let parent = el.offset_parent()?;
            if &parent == card {
                break;
            }
            el = parent.dyn_into::<HtmlElement>().ok()?;
        }
        Some(Rect::new(
            left + card.client_left() as f32,
            top + card.client_top() as f32,
            btn.offset_width() as f32,
            btn.offset_height() as f32,
        ))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Valentine proposal starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let page = Rc::new(RefCell::new(Page::new(PageConfig::load())));

        let Some(app) = document.get_element_by_id("app") else {
            log::error!("No #app element to mount into");
            return;
        };
        // Reuse the exported markup where it already matches, so the heart
        // animations keep running from first paint
        let plan = if app.child_element_count() == 0 {
            MountPlan::Remount
        } else {
            mount_plan(page.borrow().controller.state())
        };
        match plan {
            MountPlan::Keep => {}
            MountPlan::RefreshScatter => page.borrow().update_scatter(&document),
            MountPlan::Remount => app.set_inner_html(&render_page(&page.borrow().view())),
        }
        log::info!(
            "Mounted ({plan:?}, compact viewport: {})",
            page.borrow().controller.state().is_compact_viewport
        );

        setup_yes_button(&document, page.clone());
        setup_no_button(&document, page.clone());
        setup_resize(page);

        log::info!("Valentine proposal running!");
    }

    fn setup_yes_button(document: &Document, page: Rc<RefCell<Page>>) {
        let Some(btn) = document.get_element_by_id(ids::YES) else {
            log::warn!("No #{} element", ids::YES);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut p = page.borrow_mut();
            if p.controller.phase() == ProposalPhase::Accepted {
                return;
            }
            p.controller.handle(ProposalEvent::Accept, &mut rand::rng());
            let next = p.subtree();
            drop(p);
            swap_subtree(next);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_no_button(document: &Document, page: Rc<RefCell<Page>>) {
        let Some(btn) = document.get_element_by_id(ids::NO) else {
            log::warn!("No #{} element", ids::NO);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let Some(document) = current_document() else { return };
            let mut p = page.borrow_mut();
            let bounds = card_bounds(&document);
            p.controller
                .handle(ProposalEvent::EvadeTrigger(bounds), &mut rand::rng());
            p.update_no_button(&document);
        });
        let _ = btn.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(page: Rc<RefCell<Page>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(width) = WindowViewport.width() else {
                return;
            };
            let mut p = page.borrow_mut();
            let was_compact = p.controller.state().is_compact_viewport;
            p.controller
                .handle(ProposalEvent::ViewportChange(width), &mut rand::rng());
            if p.controller.state().is_compact_viewport != was_compact {
                if let Some(document) = current_document() {
                    p.update_scatter(&document);
                }
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Fade the current subtree out, then mount `next` with its enter animation
    fn swap_subtree(next: Subtree) {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        if let Some(current) = document
            .query_selector(&format!("#{} > .{}", ids::STAGE, transition::SUBTREE))
            .ok()
            .flatten()
        {
            let _ = current.class_list().add_1(transition::EXIT);
        }

        let closure = Closure::once(move || {
            let Some(document) = current_document() else { return };
            if let Some(stage) = document.get_element_by_id(ids::STAGE) {
                stage.set_inner_html(&render_subtree(&next, true));
            }
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            transition::EXIT_MS,
        );
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod export {
    use std::fs;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};

    use valentine_proposal::proposal::{LogCelebration, ProposalController};
    use valentine_proposal::view::markup::render_document;
    use valentine_proposal::view::{ViewModel, render_page};
    use valentine_proposal::viewport::FixedViewport;
    use valentine_proposal::PageConfig;

    const STYLESHEET: &str = include_str!("../static/style.css");

    #[derive(Parser, Debug)]
    #[command(name = "valentine-proposal", about = "Pre-render the Valentine proposal page")]
    struct Cli {
        /// JSON file with page config overrides
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        /// Write <out>/index.html
        Export {
            #[arg(long, default_value = "dist")]
            out: PathBuf,
        },
        /// Print the first-paint body markup
        Markup,
    }

    fn load_config(path: Option<&Path>) -> Result<PageConfig> {
        let Some(path) = path else {
            return Ok(PageConfig::load());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        PageConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
    }

    /// First paint as the browser sees it before the module runs: no
    /// display measured yet, so the regular layout
    fn first_paint(config: &PageConfig) -> ViewModel {
        let controller =
            ProposalController::new(config.clone(), LogCelebration, &FixedViewport::headless());
        ViewModel::build(controller.state(), controller.config())
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let cli = Cli::parse();
        let config = load_config(cli.config.as_deref())?;
        let model = first_paint(&config);

        match cli.command {
            Command::Export { out } => {
                fs::create_dir_all(&out)
                    .with_context(|| format!("creating {}", out.display()))?;
                // Trailing-slash hosting: every page is a directory index
                let path = out.join("index.html");
                let config_json = serde_json::to_string(&config)?;
                fs::write(&path, render_document(&model, &config_json))
                    .with_context(|| format!("writing {}", path.display()))?;
                fs::write(out.join("style.css"), STYLESHEET)
                    .with_context(|| format!("writing stylesheet to {}", out.display()))?;
                log::info!("Exported {}", path.display());
                println!("exported {}", path.display());
            }
            Command::Markup => {
                println!("{}", render_page(&model));
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    export::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
