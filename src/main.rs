use anyhow::Context;
use minidroid_native_service::utils::logger;
use minidroid_native_service::{CliArgs, NativeService, ServiceConfig};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    let args = CliArgs::parse_args(std::env::args_os());
    let invocation = args.invocation();

    let config = ServiceConfig::resolve();
    tracing::debug!("Service config: {:?}", config);

    let service = NativeService::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = service
        .run(&invocation, &mut out)
        .context("Failed to write service output")?;
    out.flush().context("Failed to flush stdout")?;

    if let Some(report) = report {
        tracing::debug!(
            input_len = report.input_len,
            copied = report.copied,
            truncated = report.is_truncated(),
            "Input processed"
        );
    }

    Ok(())
}
