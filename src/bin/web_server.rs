use shortcut_sssp::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 3005,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting route server...");
    println!("   Port: {}", config.port);
    println!("   Static files: {}", config.static_dir);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   Session timeout: {} minutes", config.session_timeout_minutes);
    println!("   Network limits: {} vertices, {} edges", config.max_vertices, config.max_edges);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
