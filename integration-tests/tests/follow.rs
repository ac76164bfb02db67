use integration_tests::harness::{LogFile, TestViewer, channel_reader};
use jog_core::JogError;
use jog_core::filter::FilterRequest;
use jog_core::tail::{Follower, Source, TailOptions, run, run_stream};
use pretty_assertions::assert_eq;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn message(text: &str) -> String {
    format!(r#"{{"level":"info","message":"{text}"}}"#)
}

fn messages_only() -> TestViewer {
    let mut config = TestViewer::default_config();
    config.pattern = "${message}".to_string();
    TestViewer::with_config(&config, FilterRequest::default())
}

#[test]
fn static_file_is_rendered_to_the_end() {
    // Arrange
    let log = LogFile::new("app.log");
    log.append_lines(&[message("a").as_str(), message("b").as_str()]);
    let mut viewer = messages_only();

    // Act
    run(
        &Source::File(log.path().to_path_buf()),
        &TailOptions::default(),
        &mut viewer,
    )
    .unwrap();

    // Assert
    assert_eq!(viewer.take_output(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn follower_survives_rotation() {
    // Arrange
    let log = LogFile::new("app.log");
    log.append_lines(&[
        message("before rotation, first").as_str(),
        message("before rotation, second").as_str(),
    ]);
    let mut follower = Follower::new(log.path(), TailOptions::default());
    let mut viewer = messages_only();
    follower.poll(&mut viewer).unwrap();
    viewer.take_output();

    // Act
    log.rotate_with(&format!("{}\n", message("fresh")));
    follower.poll(&mut viewer).unwrap();
    log.append_lines(&[message("appended").as_str()]);
    follower.poll(&mut viewer).unwrap();

    // Assert
    assert_eq!(
        viewer.take_output(),
        vec!["fresh".to_string(), "appended".to_string()]
    );
    assert_eq!(follower.cursor().line_no, 2);
}

#[test]
fn tail_starts_with_the_last_lines_then_follows() {
    let log = LogFile::new("app.log");
    let backlog: Vec<String> = (1..=20).map(|i| message(&i.to_string())).collect();
    let refs: Vec<&str> = backlog.iter().map(String::as_str).collect();
    log.append_lines(&refs);
    let options = TailOptions {
        follow: true,
        lines: Some(3),
        ..TailOptions::default()
    };
    let mut follower = Follower::new(log.path(), options);
    let mut viewer = messages_only();

    follower.poll(&mut viewer).unwrap();
    log.append_lines(&[message("live").as_str()]);
    follower.poll(&mut viewer).unwrap();

    assert_eq!(
        viewer.take_output(),
        vec![
            "18".to_string(),
            "19".to_string(),
            "20".to_string(),
            "live".to_string()
        ]
    );
}

#[test]
fn piped_backlog_is_flushed_without_waiting_for_the_tail_count() {
    // Arrange
    let (tx, source) = channel_reader();
    for text in ["one", "two", "three"] {
        tx.send(format!("{}\n", message(text)).into_bytes()).unwrap();
    }
    let (out_tx, out_rx) = mpsc::channel();
    let options = TailOptions {
        lines: Some(10),
        backlog_timeout: Duration::from_millis(100),
        ..TailOptions::default()
    };

    // Act
    thread::spawn(move || {
        let mut handler = |line_no: usize, raw: &str| -> Result<(), JogError> {
            let _ = out_tx.send((line_no, raw.to_string()));
            Ok(())
        };
        run_stream(source, &options, &mut handler)
    });

    // Assert
    let received: Vec<(usize, String)> = (0..3)
        .map(|_| out_rx.recv_timeout(Duration::from_secs(5)).unwrap())
        .collect();
    assert_eq!(
        received,
        vec![
            (1, message("one")),
            (2, message("two")),
            (3, message("three")),
        ]
    );
    assert!(out_rx.recv_timeout(Duration::from_millis(300)).is_err());
    drop(tx);
}
