use std::io;
use std::time::Duration;

use floodr_common::config::Config;
use floodr_common::network::target::Target;
use floodr_core::flooder;
use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::time::timeout;

fn config(count: usize) -> Config {
    Config {
        count,
        concurrency: 32,
        connect_timeout: Some(Duration::from_secs(2)),
        quiet: true,
    }
}

/// Accepts until the receiver is dropped, keeping every accepted socket
/// alive on the listener side.
fn spawn_listener(listener: TcpListener) -> mpsc::UnboundedReceiver<TcpStream> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Ok((stream, _peer)) = listener.accept().await {
            if tx.send(stream).is_err() {
                break;
            }
        }
    });
    rx
}

/// Full run against a live listener: every attempt lands, the listener sees
/// one accepted connection per held socket, and the held sockets stay open
/// and silent until the outcome is dropped.
#[tokio::test]
async fn flood_end_to_end_against_loopback_listener() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let mut accepted_rx = spawn_listener(listener);

    let target = Target::loopback(port)?;
    let outcome = flooder::flood(target, &config(64), None).await?;

    assert_eq!(outcome.attempted(), 64);
    assert_eq!(outcome.established() + outcome.failed(), 64);
    assert!(outcome.established() > 0, "loopback flood established nothing");

    let mut accepted = Vec::new();
    for _ in 0..outcome.established() {
        let stream = timeout(Duration::from_secs(5), accepted_rx.recv())
            .await
            .expect("listener did not see all held connections")
            .unwrap();
        accepted.push(stream);
    }

    // Held connections carry no traffic: reads on the listener side must
    // stay pending, not observe data or EOF.
    let mut buf = [0u8; 16];
    for stream in &accepted {
        match stream.try_read(&mut buf) {
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => {}
            Ok(0) => panic!("held connection was closed before the flooder exited"),
            Ok(n) => panic!("held connection sent {n} unexpected bytes"),
            Err(err) => panic!("unexpected read error on held connection: {err}"),
        }
    }

    // Dropping the outcome releases every descriptor; the listener side then
    // observes a clean EOF on each accepted socket.
    drop(outcome);
    for stream in &mut accepted {
        let read = timeout(Duration::from_secs(5), stream.read(&mut buf))
            .await
            .expect("no EOF after the flood outcome was dropped")?;
        assert_eq!(read, 0, "expected EOF, got data");
    }
    Ok(())
}

/// A dead target fails every attempt without crashing the flooder.
#[tokio::test]
async fn flood_against_closed_port_survives() -> anyhow::Result<()> {
    let reserved = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = reserved.local_addr()?.port();
    drop(reserved);

    let target = Target::loopback(port)?;
    let outcome = flooder::flood(target, &config(32), None).await?;

    assert_eq!(outcome.established(), 0);
    assert_eq!(outcome.failed(), 32);
    Ok(())
}

/// Even the smallest ceiling makes progress: with one permit against a
/// backlogged listener, every attempt still settles.
#[tokio::test]
async fn flood_with_minimal_ceiling_settles_every_attempt() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let _accepted_rx = spawn_listener(listener);

    let cfg = Config {
        concurrency: 1,
        ..config(8)
    };
    let target = Target::loopback(port)?;
    let outcome = flooder::flood(target, &cfg, None).await?;

    assert_eq!(outcome.established() + outcome.failed(), 8);
    Ok(())
}
