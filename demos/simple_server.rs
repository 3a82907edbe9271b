//! Simple chat server example
//!
//! Run with: cargo run --example simple_server [BIND_ADDR]
//!
//! Examples:
//!   cargo run --example simple_server                    # binds to 0.0.0.0:5000
//!   cargo run --example simple_server localhost          # binds to 127.0.0.1:5000
//!   cargo run --example simple_server 127.0.0.1:5001     # binds to 127.0.0.1:5001
//!
//! ## Connecting
//!
//! Open a WebSocket to ws://localhost:5000/ws, then send:
//!   {"event":"register","data":{"name":"Alice"}}
//!   {"event":"sendMessage","data":{"text":"hi"}}
//!
//! With websocat:
//!   websocat ws://localhost:5000/ws
//!
//! ## Queries
//!
//!   curl http://localhost:5000/          # health
//!   curl http://localhost:5000/users     # who is online
//!   curl http://localhost:5000/messages  # full message history

use std::net::SocketAddr;

use chat_rs::{ChatServer, ServerConfig};

/// Parse bind address from command line argument.
///
/// Accepts formats:
/// - "localhost" -> 127.0.0.1:5000
/// - "localhost:5001" -> 127.0.0.1:5001
/// - "127.0.0.1" -> 127.0.0.1:5000
/// - "0.0.0.0:5000" -> 0.0.0.0:5000
fn parse_bind_addr(arg: &str) -> Result<SocketAddr, String> {
    const DEFAULT_PORT: u16 = 5000;

    // Replace "localhost" with "127.0.0.1"
    let normalized = arg.replace("localhost", "127.0.0.1");

    // Try parsing as SocketAddr first (includes port)
    if let Ok(addr) = normalized.parse::<SocketAddr>() {
        return Ok(addr);
    }

    // Try parsing as IP address without port
    if let Ok(ip) = normalized.parse::<std::net::IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_PORT));
    }

    Err(format!(
        "Invalid bind address: '{}'. Expected format: IP:PORT or IP or 'localhost'",
        arg
    ))
}

fn print_usage() {
    eprintln!("Usage: simple_server [BIND_ADDR]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  BIND_ADDR    Address to bind to (default: 0.0.0.0:5000)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  simple_server                     # binds to 0.0.0.0:5000");
    eprintln!("  simple_server localhost           # binds to 127.0.0.1:5000");
    eprintln!("  simple_server 127.0.0.1:5001      # binds to 127.0.0.1:5001");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let bind_addr = match args.get(1) {
        Some(addr_str) => match parse_bind_addr(addr_str) {
            Ok(addr) => addr,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        },
        None => "0.0.0.0:5000".parse().unwrap(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chat_rs=debug".parse()?)
                .add_directive("simple_server=debug".parse()?),
        )
        .init();

    let config = ServerConfig {
        bind_addr,
        ..ServerConfig::default()
    };

    println!("Starting chat server on {}", config.bind_addr);
    println!();
    println!("=== Chat ===");
    println!("WebSocket:  ws://localhost:{}/ws", config.bind_addr.port());
    println!("Register:   {{\"event\":\"register\",\"data\":{{\"name\":\"Alice\"}}}}");
    println!("Message:    {{\"event\":\"sendMessage\",\"data\":{{\"text\":\"hi\"}}}}");
    println!();
    println!("=== Queries ===");
    println!("curl http://localhost:{}/users", config.bind_addr.port());
    println!("curl http://localhost:{}/messages", config.bind_addr.port());
    println!();

    let server = ChatServer::new(config);

    tokio::select! {
        result = server.run() => {
            if let Err(e) = result {
                eprintln!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\nShutting down...");
        }
    }

    Ok(())
}
