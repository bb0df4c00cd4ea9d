use std::cell::RefCell;
use std::rc::Rc;

use super::*;

type EventLog = Rc<RefCell<Vec<String>>>;

struct MockStream {
    log: EventLog,
    id: usize,
    width: u32,
    height: u32,
    fail_grab: bool,
}

impl CameraStream for MockStream {
    fn grab_frame(&mut self) -> BoothResult<CameraFrame> {
        if self.fail_grab {
            return Err(BoothError::capture("frame grab failed"));
        }
        Ok(CameraFrame {
            width: self.width,
            height: self.height,
            rgba8: vec![128; (self.width * self.height * 4) as usize],
        })
    }

    fn stop(&mut self) {
        self.log.borrow_mut().push(format!("stop:{}", self.id));
    }
}

struct MockDevice {
    log: EventLog,
    next_id: usize,
    deny: bool,
    fail_grab: bool,
}

impl MockDevice {
    fn boxed(log: &EventLog) -> Box<Self> {
        Box::new(Self {
            log: log.clone(),
            next_id: 0,
            deny: false,
            fail_grab: false,
        })
    }
}

impl CameraDevice for MockDevice {
    fn open(&mut self, facing: FacingMode) -> BoothResult<Box<dyn CameraStream>> {
        if self.deny {
            return Err(BoothError::capture("permission denied"));
        }
        self.next_id += 1;
        self.log
            .borrow_mut()
            .push(format!("open:{}:{facing:?}", self.next_id));
        Ok(Box::new(MockStream {
            log: self.log.clone(),
            id: self.next_id,
            width: 64,
            height: 48,
            fail_grab: self.fail_grab,
        }))
    }
}

fn snapshot_dimensions(photo: &EncodedPhoto) -> (u32, u32) {
    let img = image::load_from_memory(photo.as_bytes()).unwrap();
    (img.width(), img.height())
}

#[test]
fn countdown_runs_per_shot_until_finished() {
    let log = EventLog::default();
    let mut session = CaptureSession::new(MockDevice::boxed(&log), 2).unwrap();
    assert!(session.has_feed());
    assert!(!session.is_capturing());

    session.start_countdown();
    assert!(session.is_capturing());
    assert_eq!(session.tick(), Some(CaptureEvent::Counting(2)));
    assert_eq!(session.tick(), Some(CaptureEvent::Counting(1)));
    assert_eq!(session.tick(), Some(CaptureEvent::Captured(1)));
    assert_eq!(session.tick(), Some(CaptureEvent::Counting(2)));
    assert_eq!(session.tick(), Some(CaptureEvent::Counting(1)));
    assert_eq!(session.tick(), Some(CaptureEvent::Finished));

    assert!(session.is_complete());
    assert!(!session.is_capturing());
    assert_eq!(session.photos().len(), 2);
    assert_eq!(session.tick(), None);
}

#[test]
fn restarting_the_countdown_discards_earlier_shots() {
    let log = EventLog::default();
    let mut session = CaptureSession::new(MockDevice::boxed(&log), 1).unwrap();
    session.start_countdown();
    for _ in 0..COUNTDOWN_SECONDS {
        session.tick();
    }
    assert!(session.is_complete());

    session.start_countdown();
    assert!(session.photos().is_empty());
}

#[test]
fn flip_releases_the_stream_before_acquiring_the_next() {
    let log = EventLog::default();
    let mut session = CaptureSession::new(MockDevice::boxed(&log), 1).unwrap();
    assert_eq!(session.facing(), FacingMode::User);

    session.flip_facing();
    assert_eq!(session.facing(), FacingMode::Environment);
    assert_eq!(
        *log.borrow(),
        vec!["open:1:User", "stop:1", "open:2:Environment"]
    );
}

#[test]
fn denied_permission_leaves_the_feed_blank() {
    let log = EventLog::default();
    let mut device = MockDevice::boxed(&log);
    device.deny = true;
    let mut session = CaptureSession::new(device, 2).unwrap();
    assert!(!session.has_feed());
    assert!(matches!(
        session.snapshot().unwrap_err(),
        BoothError::Capture(_)
    ));
}

#[test]
fn failed_snapshot_aborts_the_sequence() {
    let log = EventLog::default();
    let mut device = MockDevice::boxed(&log);
    device.fail_grab = true;
    let mut session = CaptureSession::new(device, 2).unwrap();
    session.start_countdown();
    session.tick();
    session.tick();
    assert_eq!(session.tick(), None);
    assert!(!session.is_capturing());
    assert!(session.photos().is_empty());
}

#[test]
fn rotation_is_baked_into_the_snapshot() {
    let log = EventLog::default();
    let mut session = CaptureSession::new(MockDevice::boxed(&log), 1).unwrap();
    assert_eq!(snapshot_dimensions(&session.snapshot().unwrap()), (64, 48));

    session.rotate_step();
    assert_eq!(snapshot_dimensions(&session.snapshot().unwrap()), (48, 64));

    session.rotate_step();
    assert_eq!(snapshot_dimensions(&session.snapshot().unwrap()), (64, 48));
}

#[test]
fn mirroring_still_produces_a_decodable_snapshot() {
    let log = EventLog::default();
    let mut session = CaptureSession::new(MockDevice::boxed(&log), 1).unwrap();
    session.toggle_mirror();
    assert_eq!(snapshot_dimensions(&session.snapshot().unwrap()), (64, 48));
}

#[test]
fn finish_requires_a_complete_sequence_and_releases_the_stream() {
    let log = EventLog::default();
    let mut session = CaptureSession::new(MockDevice::boxed(&log), 1).unwrap();
    session.start_countdown();
    for _ in 0..COUNTDOWN_SECONDS {
        session.tick();
    }

    let context = session.finish("2026-08-25 14:02").unwrap();
    assert_eq!(context.photos.len(), 1);
    assert_eq!(context.count, 1);
    assert_eq!(context.timestamp, "2026-08-25 14:02");
    assert_eq!(context.format, StripFormat::Portrait);
    assert!(log.borrow().iter().any(|e| e == "stop:1"));
}

#[test]
fn finish_rejects_incomplete_captures() {
    let log = EventLog::default();
    let session = CaptureSession::new(MockDevice::boxed(&log), 3).unwrap();
    assert!(matches!(
        session.finish("t").unwrap_err(),
        BoothError::Capture(_)
    ));
}
