//! Headless fast scroller demo.
//!
//! Attaches a scroller to a 200-item reference list, drags the handle, lets
//! go, scrolls the list by hand and logs what the scroller does in response.
//!
//! Usage: `fastscroll-demo [config.json]`

use std::cell::RefCell;
use std::rc::Rc;

use fastscroll::{
    FastScroller, LinearList, ListAdapter, ScrollerConfig, ScrollerOrientation, StringListAdapter,
};
use fastscroll_ui::{Event, Limits, Renderer, Size, Widget};

/// Demo surface size (portrait phone)
const SURFACE: (u32, u32) = (360, 640);

/// Extent of a list row along the scroll axis
const ITEM_EXTENT: f32 = 48.0;

const WORDS: &[&str] = &[
    "acorn", "birch", "cedar", "dogwood", "elm", "fir", "ginkgo", "hazel", "ivy", "juniper",
    "kapok", "larch", "maple", "nutmeg", "oak", "pine", "quince", "rowan", "spruce", "teak",
];

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match ScrollerConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ScrollerConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();
    log::info!("Log level: {}", config.log_level.name());

    run(&config);
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn run(config: &ScrollerConfig) {
    let orientation = config.orientation;
    let surface = Size::new(SURFACE.0 as f32, SURFACE.1 as f32);

    let items = (0..200).map(|i| format!("{} {}", WORDS[i * WORDS.len() / 200], i));
    let adapter: Rc<dyn ListAdapter> = Rc::new(StringListAdapter::new(items));
    let list = Rc::new(RefCell::new(
        LinearList::new(orientation, surface, ITEM_EXTENT).with_adapter(adapter),
    ));

    let mut scroller: FastScroller<LinearList> = FastScroller::from_config(config);
    let layout = scroller.layout(&Limits::with_range(0.0, surface.width, 0.0, surface.height));

    // Pin the scroller to the trailing edge of the list
    let (x, y) = match orientation {
        ScrollerOrientation::Vertical => (surface.width - layout.size().width, 0.0),
        ScrollerOrientation::Horizontal => (0.0, surface.height - layout.size().height),
    };
    let layout = layout.at(x, y);

    scroller.attach(list.clone());
    scroller.sync();
    log::info!("Scroller {:?}", scroller);

    // Grab the handle in its middle, then drag it in steps to the far end
    let grab = scroller.handle_rect(layout.position()).center();
    let travel = orientation.main(layout.size());
    let mut script = vec![Event::pressed(grab.x, grab.y)];
    for step in 1..=4 {
        let along = travel * step as f32 / 4.0;
        let point = match orientation {
            ScrollerOrientation::Vertical => (grab.x, y + along),
            ScrollerOrientation::Horizontal => (x + along, grab.y),
        };
        script.push(Event::moved(point.0, point.1));
    }
    let last = script.last().map(Event::position).unwrap_or(grab);
    script.push(Event::released(last.x, last.y));

    let mut renderer = Renderer::new();
    for event in &script {
        let message = scroller.on_event(event, &layout);
        let echoed = scroller.sync();

        renderer.begin_frame();
        scroller.draw(&mut renderer, &layout);
        log::info!(
            "{:?} -> {:?}; list offset {:.1}, handle {:.1}, bubble '{}', {} echo(s), {} draw command(s)",
            event,
            message,
            list.borrow().scroll_offset(),
            scroller.handle_offset(),
            scroller.bubble().text(),
            echoed,
            renderer.commands().len()
        );
    }

    // Natural scrolling back towards the start moves the handle
    for delta in [-1500.0, -1500.0, -10_000.0] {
        let applied = list.borrow_mut().scroll_by(delta);
        scroller.sync();
        log::info!(
            "scrolled {:.1} -> list offset {:.1}, fraction {:.3}, handle {:.1}",
            applied,
            list.borrow().scroll_offset(),
            scroller.fraction(),
            scroller.handle_offset()
        );
    }

    println!(
        "fastscroll-demo: {} events, final fraction {:.3}, visible: {}",
        script.len(),
        scroller.fraction(),
        scroller.is_visible()
    );
}
