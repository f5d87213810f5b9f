//! End-to-end transfer over real TCP sockets on loopback.

use std::io::Cursor;
use std::net::SocketAddr;
use std::thread;
use std::time::Duration;

use evtwire_frame::Record;
use evtwire_session::{Outcome, ReceiverSession, SenderSession, SessionReport};
use evtwire_transport::{connect, Listener};

fn loopback_any() -> SocketAddr {
    "127.0.0.1:0".parse().expect("literal address should parse")
}

fn stored_stream(bodies: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::new();
    for body in bodies {
        out.extend_from_slice(
            Record::from_body(body)
                .expect("test body should fit")
                .as_bytes(),
        );
    }
    out
}

/// Run one full transfer: sender reads `stored`, receiver writes what
/// arrives. Returns both reports and the received bytes.
fn transfer(stored: Vec<u8>, delay: Option<Duration>) -> (SessionReport, SessionReport, Vec<u8>) {
    let listener = Listener::bind(loopback_any()).expect("bind should succeed");
    let addr = listener.local_addr();

    let sender = thread::spawn(move || {
        let conn = connect(addr).expect("connect should succeed");
        SenderSession::new(Cursor::new(stored), conn, delay)
            .run()
            .expect("sender session should not fault")
    });

    let conn = listener.accept().expect("accept should succeed");
    let mut received = Vec::new();
    let recv_report = ReceiverSession::new(conn, &mut received)
        .run()
        .expect("receiver session should not fault");

    let send_report = sender.join().expect("sender thread should not panic");
    (send_report, recv_report, received)
}

#[test]
fn round_trip_identity() {
    let stored = stored_stream(&[b"\xAA\xBB\xCC\xDD", b"\x11\x22", b"", b"last-record"]);
    let (send_report, recv_report, received) = transfer(stored.clone(), None);

    assert_eq!(send_report, SessionReport::new(4, Outcome::Clean));
    assert_eq!(recv_report, SessionReport::new(4, Outcome::Clean));
    assert_eq!(received, stored);
}

#[test]
fn empty_input_transfers_zero_records() {
    let (send_report, recv_report, received) = transfer(Vec::new(), None);

    assert_eq!(send_report, SessionReport::new(0, Outcome::Clean));
    assert_eq!(recv_report, SessionReport::new(0, Outcome::Clean));
    assert!(received.is_empty());
}

#[test]
fn paced_transfer_preserves_content() {
    let stored = stored_stream(&[b"a", b"b", b"c"]);
    let (send_report, recv_report, received) =
        transfer(stored.clone(), Some(Duration::from_millis(5)));

    assert_eq!(send_report.records, 3);
    assert_eq!(recv_report.records, 3);
    assert_eq!(received, stored);
}

#[test]
fn large_records_cross_intact() {
    let big = vec![0x5A; 256 * 1024];
    let stored = stored_stream(&[&big, b"tail"]);
    let (send_report, recv_report, received) = transfer(stored.clone(), None);

    assert_eq!(send_report.records, 2);
    assert_eq!(recv_report.records, 2);
    assert_eq!(received, stored);
}

#[test]
fn truncated_input_sends_only_complete_records() {
    let mut stored = stored_stream(&[b"whole"]);
    let complete_len = stored.len();
    stored.extend_from_slice(&[0x40, 0, 0, 0, 0xFF]); // declares 64, has 5

    let (send_report, recv_report, received) = transfer(stored, None);

    assert_eq!(
        send_report,
        SessionReport::new(1, Outcome::Truncated { declared: 64 })
    );
    // The receiver only ever sees the complete record, so its stream
    // ends cleanly on a boundary.
    assert_eq!(recv_report, SessionReport::new(1, Outcome::Clean));
    assert_eq!(received.len(), complete_len);
}

#[test]
fn receiver_reports_truncation_when_sender_dies_mid_record() {
    let listener = Listener::bind(loopback_any()).expect("bind should succeed");
    let addr = listener.local_addr();

    let sender = thread::spawn(move || {
        use std::io::Write;
        let mut conn = connect(addr).expect("connect should succeed");
        // A committed prefix promising 16 bytes, then hang up.
        conn.write_all(&[0x10, 0, 0, 0, 0x01, 0x02])
            .expect("raw write should succeed");
    });

    let conn = listener.accept().expect("accept should succeed");
    let mut received = Vec::new();
    let report = ReceiverSession::new(conn, &mut received)
        .run()
        .expect("truncation is a report, not a fault");
    sender.join().expect("sender thread should not panic");

    assert_eq!(report, SessionReport::new(0, Outcome::Truncated { declared: 16 }));
    assert!(received.is_empty());
}

#[test]
fn receiver_halts_on_invalid_length_from_peer() {
    let listener = Listener::bind(loopback_any()).expect("bind should succeed");
    let addr = listener.local_addr();

    let sender = thread::spawn(move || {
        use std::io::Write;
        let mut conn = connect(addr).expect("connect should succeed");
        conn.write_all(&[0x03, 0, 0, 0]).expect("raw write should succeed");
    });

    let conn = listener.accept().expect("accept should succeed");
    let mut received = Vec::new();
    let report = ReceiverSession::new(conn, &mut received)
        .run()
        .expect("invalid length is a report, not a fault");
    sender.join().expect("sender thread should not panic");

    assert_eq!(
        report,
        SessionReport::new(0, Outcome::InvalidLength { length: 3 })
    );
    assert!(received.is_empty());
}
