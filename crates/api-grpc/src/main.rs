//! Standalone gRPC server binary.
//!
//! Runs only the gRPC API. The workspace's main `mcdonald-run` binary runs gRPC and REST
//! together.

use std::net::SocketAddr;
use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{auth_interceptor, pb::mcdonald_server::McdonaldServer, McdonaldService};
use api_shared::FILE_DESCRIPTOR_SET;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_grpc=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("MCDONALD_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:50051".into())
        .parse()?;

    tracing::info!("-- Starting McDonald gRPC on {}", addr);

    let mut server_builder = Server::builder().add_service(McdonaldServer::with_interceptor(
        McdonaldService::default(),
        auth_interceptor,
    ));

    if std::env::var("MCDONALD_ENABLE_REFLECTION").unwrap_or_else(|_| "false".to_string())
        == "true"
    {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        server_builder = server_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    } else {
        tracing::info!("gRPC server reflection disabled");
    }

    server_builder.serve(addr).await?;

    Ok(())
}
