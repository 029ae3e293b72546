/*
Copyright 2022 Volker Schwaberow <volker@schwaberow.de>
Permission is hereby granted, free of charge, to any person obtaining a
copy of this software and associated documentation files (the
"Software"), to deal in the Software without restriction, including without
limitation the rights to use, copy, modify, merge, publish, distribute,
sublicense, and/or sell copies of the Software, and to permit persons to whom the
Software is furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be
included in all copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS
OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR
OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE,
ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
DEALINGS IN THE SOFTWARE.
Author(s): Volker Schwaberow
*/

use clap::Parser;
use colored::Colorize;
use rxss::cli::Cli;
use rxss::getstate::ScanState;
use rxss::http::Http;
use rxss::probe::{probe_all, ProbeOptions};
use rxss::report::{ReportFormat, ReportGenerator};
use rxss::target::parse_targets;
use simple_logger::SimpleLogger;
use std::io::{self, Read};
use std::process::ExitCode;

fn read_input(cli: &Cli) -> io::Result<String> {
    match &cli.input_file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().lock().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(cli.log_level()).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.to_config();
    let options = ProbeOptions {
        placeholder: cli.placeholder.clone(),
        param: cli.param.clone(),
    };

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{} {}", "Failed to read targets:".red(), e);
            return ExitCode::FAILURE;
        }
    };
    let targets = parse_targets(&input);

    let http = match Http::new(config) {
        Ok(http) => http,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut state = ScanState::new();
    let entries = probe_all(&http, &targets, &options, &mut state);

    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    let mut stdout = io::stdout().lock();
    if let Err(e) = ReportGenerator::write_report(&entries, &mut stdout, format, config.print_failed()) {
        eprintln!("{} {}", "Failed to write report:".red(), e);
        return ExitCode::FAILURE;
    }

    if !config.suppress_stats() {
        eprintln!();
        eprintln!("{}", state.summary());
    }

    ExitCode::SUCCESS
}
