//! Window listener registration and teardown

use std::cell::RefCell;
use std::rc::Rc;
use taskboard::window::{self, Window, WindowEvent};
use taskboard::{Board, BoardController, Column, Task, TaskId};
use tracing_test::traced_test;

fn shared_controller() -> Rc<RefCell<BoardController>> {
    let board = Board::from_columns([Column::new("a", "A").with_items(vec![
        Task::with_id("t1", "one"),
        Task::with_id("t2", "two"),
    ])])
    .unwrap();
    Rc::new(RefCell::new(BoardController::new(board)))
}

fn select_both(controller: &Rc<RefCell<BoardController>>) {
    let mut ctrl = controller.borrow_mut();
    ctrl.toggle_in_group(&TaskId::from("t1")).unwrap();
    ctrl.toggle_in_group(&TaskId::from("t2")).unwrap();
}

#[test]
fn test_mount_registers_three_listeners() {
    let window = Window::new();
    let controller = shared_controller();

    let subscription = window::mount(&controller, &window);
    assert_eq!(window.listener_count(), 3);

    drop(subscription);
    assert_eq!(window.listener_count(), 0);
}

#[test]
fn test_background_click_clears_while_mounted() {
    let window = Window::new();
    let controller = shared_controller();
    let _subscription = window::mount(&controller, &window);

    select_both(&controller);
    window.dispatch(&WindowEvent::click());
    assert!(controller.borrow().selection().is_empty());
}

#[test]
fn test_escape_clears_other_keys_do_not() {
    let window = Window::new();
    let controller = shared_controller();
    let _subscription = window::mount(&controller, &window);

    select_both(&controller);
    window.dispatch(&WindowEvent::key_down("ArrowDown"));
    assert_eq!(controller.borrow().selection().len(), 2);

    window.dispatch(&WindowEvent::key_down("Escape"));
    assert!(controller.borrow().selection().is_empty());
}

#[test]
fn test_prevented_touch_is_ignored() {
    let window = Window::new();
    let controller = shared_controller();
    let _subscription = window::mount(&controller, &window);

    select_both(&controller);
    window.dispatch(&WindowEvent::TouchEnd {
        default_prevented: true,
    });
    assert_eq!(controller.borrow().selection().len(), 2);

    window.dispatch(&WindowEvent::touch_end());
    assert!(controller.borrow().selection().is_empty());
}

#[test]
fn test_unmounted_controller_no_longer_reacts() {
    let window = Window::new();
    let controller = shared_controller();
    let subscription = window::mount(&controller, &window);
    subscription.unsubscribe();

    select_both(&controller);
    assert_eq!(window.dispatch(&WindowEvent::click()), 0);
    assert_eq!(controller.borrow().selection().len(), 2);
}

#[test]
fn test_listeners_outlive_controller_harmlessly() {
    let window = Window::new();
    let controller = shared_controller();
    let _subscription = window::mount(&controller, &window);
    drop(controller);

    // Listener still registered but its controller is gone
    assert_eq!(window.dispatch(&WindowEvent::click()), 1);
}

#[traced_test]
#[test]
fn test_mount_and_teardown_are_logged() {
    let window = Window::new();
    let controller = shared_controller();
    let subscription = window::mount(&controller, &window);
    drop(subscription);

    assert!(logs_contain("window listeners registered"));
    assert!(logs_contain("window listeners removed"));
}
