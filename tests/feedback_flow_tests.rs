//! End-to-end tests driving a Feedback context the way a render loop does

use std::time::Duration;

use berber_feedback::alert::{AlertOptions, ConfirmOptions};
use berber_feedback::notification::{NotificationOptions, sleep_until_dismissal};
use berber_feedback::{Feedback, FeedbackEvent};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep, timeout};

/// What the rendering layer would draw: (alert visible, toast visible)
type Frame = (bool, bool);

fn frame(feedback: &Feedback) -> Frame {
    (feedback.alert.is_visible(), feedback.notification.is_visible())
}

/// Runs a minimal UI loop until nothing is on screen, returning the rendered frames
async fn run_until_idle(
    feedback: &mut Feedback,
    events: &mut mpsc::UnboundedReceiver<FeedbackEvent>,
) -> Vec<Frame> {
    let mut frames = Vec::new();
    loop {
        if feedback.should_render() {
            frames.push(frame(feedback));
            feedback.clear_dirty();
        }
        if !feedback.alert.is_visible() && !feedback.notification.is_visible() {
            return frames;
        }
        tokio::select! {
            Some(event) = events.recv() => feedback.handle_event(event),
            _ = sleep_until_dismissal(feedback.next_deadline()) => {
                feedback.tick();
            }
        }
    }
}

fn click_after(tx: &mpsc::UnboundedSender<FeedbackEvent>, delay_ms: u64, event: FeedbackEvent) {
    let tx = tx.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(delay_ms)).await;
        let _ = tx.send(event);
    });
}

#[tokio::test(start_paused = true)]
async fn test_confirm_dialog_and_toast_in_one_loop() {
    let mut feedback = Feedback::default();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let answer = tokio::spawn(
        feedback
            .alert
            .show_confirm(ConfirmOptions::new("Delete order #42?")),
    );
    feedback
        .notification
        .show_notification(NotificationOptions::new("Order archived").duration_ms(1000));
    click_after(&tx, 200, FeedbackEvent::Confirm);

    let frames = run_until_idle(&mut feedback, &mut rx).await;

    assert!(answer.await.unwrap());
    assert_eq!(frames, vec![(true, true), (false, true), (false, false)]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_click_resolves_false() {
    let mut feedback = Feedback::default();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let answer = tokio::spawn(feedback.alert.show_alert(AlertOptions::new("Leave page?")));
    click_after(&tx, 50, FeedbackEvent::Cancel);

    run_until_idle(&mut feedback, &mut rx).await;

    assert!(!answer.await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_second_toast_postpones_dismissal() {
    let mut feedback = Feedback::default();
    let (_tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();

    feedback.notification.show_info_notification("first");
    sleep(Duration::from_millis(10)).await;
    feedback.notification.show_info_notification("second");

    run_until_idle(&mut feedback, &mut rx).await;

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(5010), "dismissed too early: {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(5100), "dismissed too late: {:?}", elapsed);
    assert_eq!(feedback.notification.record().message, "second");
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_before_timer() {
    let mut feedback = Feedback::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();

    feedback.notification.show_error_notification("Network error");
    click_after(&tx, 300, FeedbackEvent::DismissNotification);

    run_until_idle(&mut feedback, &mut rx).await;

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_millis(5000));
    assert!(feedback.next_deadline().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_replaced_alert_never_resolves() {
    let mut feedback = Feedback::default();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let first = tokio::spawn(feedback.alert.show_confirm(ConfirmOptions::new("First?")));
    let second = tokio::spawn(feedback.alert.show_confirm(ConfirmOptions::new("Second?")));
    click_after(&tx, 100, FeedbackEvent::Confirm);

    run_until_idle(&mut feedback, &mut rx).await;

    assert!(second.await.unwrap());
    assert!(
        timeout(Duration::from_secs(3600), first).await.is_err(),
        "Replaced alert should stay unresolved"
    );
}
