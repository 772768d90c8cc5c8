use anyhow::Result;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Keeps the OTLP pipelines alive; flushes them on shutdown.
#[derive(Default)]
pub struct TelemetryGuard {
    logger_provider: Option<SdkLoggerProvider>,
    tracer_provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    pub fn shutdown(self) {
        if let Some(tracer_provider) = self.tracer_provider {
            if let Err(e) = tracer_provider.shutdown() {
                eprintln!("Failed to shut down tracer provider: {}", e);
            }
        }
        if let Some(logger_provider) = self.logger_provider {
            if let Err(e) = logger_provider.shutdown() {
                eprintln!("Failed to shut down logger provider: {}", e);
            }
        }
    }
}

pub fn initialize_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard> {
    let env_filter = create_environment_filter(&config.log_level, &config.excluded_modules)?;
    let fmt_layer = tracing_subscriber::fmt::layer().with_thread_names(true);

    if !config.enabled {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
        return Ok(TelemetryGuard::default());
    }

    let logger_provider = create_logger_provider(config)?;
    let logger_layer = OpenTelemetryTracingBridge::new(&logger_provider);

    let tracer_provider = create_tracer_provider(config)?;
    let tracer = tracer_provider.tracer(config.service_name.clone());
    let tracer_layer = OpenTelemetryLayer::new(tracer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(logger_layer)
        .with(tracer_layer)
        .try_init()?;

    Ok(TelemetryGuard {
        logger_provider: Some(logger_provider),
        tracer_provider: Some(tracer_provider),
    })
}

fn create_environment_filter(log_level: &str, excluded_modules: &[String]) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(log_level)?;

    for module in excluded_modules {
        let directive = format!("{}=off", module);
        filter = filter.add_directive(directive.parse()?);
    }

    Ok(filter)
}

fn create_opentelemetry_resource(service_name: String) -> Resource {
    Resource::builder().with_service_name(service_name).build()
}

fn create_tracer_provider(config: &TelemetryConfig) -> Result<SdkTracerProvider> {
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&config.otlp_endpoint)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create span exporter: {}", e))?;

    Ok(SdkTracerProvider::builder()
        .with_resource(create_opentelemetry_resource(config.service_name.clone()))
        .with_batch_exporter(exporter)
        .build())
}

fn create_logger_provider(config: &TelemetryConfig) -> Result<SdkLoggerProvider> {
    let exporter = LogExporter::builder()
        .with_tonic()
        .with_endpoint(&config.otlp_endpoint)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create log exporter: {}", e))?;

    Ok(SdkLoggerProvider::builder()
        .with_resource(create_opentelemetry_resource(config.service_name.clone()))
        .with_batch_exporter(exporter)
        .build())
}
