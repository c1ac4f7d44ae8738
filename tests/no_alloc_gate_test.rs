use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snake::core::{Frame, GameConfig, GameSession, OccupancyMap};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Command, Point};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Only one test in this binary: the counter is process-wide.
#[test]
fn tick_and_render_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let mut session = GameSession::new(&GameConfig::default().with_seed(1));
    session.set_obstacles(Vec::new());
    session.set_fruit(Point::new(13, 10));
    session.set_power_up(Some(Point::new(3, 3)));
    session.apply_command(Command::MoveRight);

    let mut cells = OccupancyMap::new(session.field());
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up: one pickup grows the body past its initial capacity.
    assert!(session.step().ate_fruit);
    session.set_fruit(Point::new(15, 10));
    cells.rebuild(&session);
    let frame = Frame {
        field: session.field(),
        cells: &cells,
        status: session.status_line(),
    };
    view.render_into(&frame, None, viewport, &mut fb);

    let mut eaten = 0;
    let allocs = with_alloc_counting(|| {
        // 13 -> 23 stays inside the 25-wide field.
        for _ in 0..10 {
            let report = session.step();
            if report.ate_fruit {
                // One pickup: relocation must not allocate. Park the new fruit
                // off the path so no level-up (which rebuilds obstacles) happens.
                eaten += 1;
                session.set_fruit(Point::new(1, 1));
            }

            cells.rebuild(&session);
            let frame = Frame {
                field: session.field(),
                cells: &cells,
                status: session.status_line(),
            };
            view.render_into(&frame, None, viewport, &mut fb);
        }
    });

    assert!(session.is_running());
    assert_eq!(eaten, 1);
    assert_eq!(session.score(), 20);
    assert_eq!(allocs, 0);
}
