// Dweve HBOI - HBO-i Domain Description Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HBO-i MCP server binary.
//!
//! # Usage
//!
//! ```bash
//! # Run against the bundled dataset
//! hboi-mcp --data-dir data
//!
//! # Custom file names
//! hboi-mcp --data-dir /srv/hboi --schema custom.schema.json --data custom.json
//!
//! # Debug logging (stderr; stdout carries the protocol)
//! RUST_LOG=debug hboi-mcp
//! ```

use clap::Parser;
use hboi_core::{CacheConfig, HboiService, HboiServiceConfig, LoaderConfig};
use hboi_mcp::{McpServer, McpServerConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hboi-mcp")]
#[command(author = "Dweve B.V.")]
#[command(version)]
#[command(about = "HBO-i Model Context Protocol (MCP) server")]
struct Cli {
    /// Directory holding the schema and dataset files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Schema file name within the data directory
    #[arg(long, default_value = "hboi.schema.json")]
    schema: String,

    /// Dataset file name within the data directory
    #[arg(long, default_value = "hboi.example.json")]
    data: String,

    /// Disable the dataset cache
    #[arg(long)]
    no_cache: bool,

    /// Use the async runtime
    #[arg(long, default_value = "true")]
    r#async: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("hboi_mcp=info".parse().expect("valid log directive"))
                .add_directive("hboi_core=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut service = HboiService::new(HboiServiceConfig {
        loader: LoaderConfig {
            base_dir: cli.data_dir,
            schema_file: cli.schema,
            data_file: cli.data,
        },
        cache: CacheConfig::default(),
        enable_caching: !cli.no_cache,
    });
    service.initialize()?;

    let mut server = McpServer::new(McpServerConfig::default(), service);

    if cli.r#async {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async { server.run_stdio_async().await })?;
    } else {
        server.run_stdio()?;
    }

    Ok(())
}
