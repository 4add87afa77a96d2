// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;

use voicecheckr::cli::{
    format_alerts, format_json, format_method_details, print_export_summary, print_methods,
    resolve_config, Args, Command, OutputFormat, TerminalView,
};
use voicecheckr::export::{run_export, write_csv_file};
use voicecheckr::{HttpTransport, PageState, SelectedFile, UploadController};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match &args.command {
        Command::Methods => {
            print_methods();
            Ok(())
        }
        Command::Health => {
            let config = resolve_config(&args)?;
            let transport = HttpTransport::new(&config)?;
            let healthy = transport
                .health()
                .with_context(|| format!("Could not reach {}", config.health_url()))?;
            if healthy {
                println!("{} {}", "✓".green(), config.server_url);
                Ok(())
            } else {
                anyhow::bail!("{} is not healthy", config.server_url)
            }
        }
        Command::Detect { file, method, format } => {
            let config = resolve_config(&args)?;
            let transport = HttpTransport::new(&config)?;
            let selected = file.as_ref().map(SelectedFile::from_path).transpose()?;
            let file_name = selected
                .as_ref()
                .map(|f| f.file_name.clone())
                .unwrap_or_default();

            match format {
                OutputFormat::Text => {
                    let mut controller = UploadController::new(TerminalView::new(), transport, config);
                    controller.on_file_selected(selected);
                    controller.select_method(*method);
                    // The view has already alerted on failure
                    let Ok(result) = controller.submit() else {
                        std::process::exit(1);
                    };
                    if args.verbose {
                        print!("{}", format_method_details(&result));
                    }
                }
                OutputFormat::Json | OutputFormat::Html => {
                    let page = PageState::new(&config.placeholder_label);
                    let mut controller = UploadController::new(page, transport, config);
                    controller.on_file_selected(selected);
                    controller.select_method(*method);
                    let Ok(result) = controller.submit() else {
                        eprintln!("{}", format_alerts(controller.view()).red());
                        std::process::exit(1);
                    };
                    if *format == OutputFormat::Json {
                        println!("{}", format_json(&file_name, &result));
                    } else {
                        print!("{}", controller.view().result_section_html());
                    }
                }
            }
            Ok(())
        }
        Command::Export {
            input,
            output,
            method,
            no_progress,
        } => {
            let config = resolve_config(&args)?;
            let transport = HttpTransport::new(&config)?;
            let summary = run_export(&transport, &config, input, *method, !no_progress)?;
            write_csv_file(&summary.records, output)?;
            print_export_summary(&summary, output);
            Ok(())
        }
    }
}
