mod config;

use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{McdonaldService, auth_interceptor, pb::mcdonald_server::McdonaldServer};
use api_shared::FILE_DESCRIPTOR_SET;
use config::ServerConfig;

/// Main entry point for the McDonald criteria service
///
/// Starts both gRPC and REST servers concurrently:
/// - gRPC server on port 50051 (configurable via MCDONALD_ADDR)
/// - REST server on port 3000 (configurable via MCDONALD_REST_ADDR)
///
/// The gRPC server requires authentication via x-api-key header.
/// The REST server provides open access to classification.
///
/// # Environment Variables
/// - `MCDONALD_ADDR`: gRPC server address (default: "0.0.0.0:50051")
/// - `MCDONALD_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MCDONALD_ENABLE_REFLECTION`: set to "true" to enable gRPC reflection
/// - `API_KEY`: API key for gRPC authentication
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mcdonald_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;

    tracing::info!("++ Starting McDonald gRPC on {}", cfg.grpc_addr);
    tracing::info!("++ Starting McDonald REST on {}", cfg.rest_addr);

    let listener = tokio::net::TcpListener::bind(&cfg.rest_addr).await?;
    let rest_server = tokio::spawn(async move { axum::serve(listener, api_rest::router()).await });

    let mut grpc_router = Server::builder().add_service(McdonaldServer::with_interceptor(
        McdonaldService,
        auth_interceptor,
    ));
    if cfg.enable_reflection {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        grpc_router = grpc_router.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    }
    let grpc_server = grpc_router.serve(cfg.grpc_addr);

    // Run both
    let (rest_result, grpc_result) = tokio::join!(rest_server, grpc_server);
    rest_result??;
    grpc_result?;

    Ok(())
}
