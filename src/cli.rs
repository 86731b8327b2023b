use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ars_common::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use ars_common::Probe;

#[derive(Parser)]
#[command(name = "ars")]
#[command(about = "ARS 地址解析系統コンソール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドのベースURL（環境変数・設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 地址を解析して結果を表示
    Analyze {
        /// 解析する地址
        #[arg(required = true)]
        address: String,
    },

    /// 解析記録を1ページ表示
    Records {
        /// ページ番号（1始まり）
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,

        /// ページサイズ
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },

    /// 解析記録1ページ分をCSVに出力
    Export {
        /// ページ番号（1始まり）
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,

        /// ページサイズ
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,

        /// 出力ディレクトリ（省略時はカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// バックエンドの疎通確認
    Probe {
        /// 対象 (cache/queue)
        #[arg(value_enum)]
        target: ProbeTarget,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 疎通確認の対象
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProbeTarget {
    /// Redis
    Cache,
    /// RabbitMQ
    Queue,
}

impl From<ProbeTarget> for Probe {
    fn from(target: ProbeTarget) -> Self {
        match target {
            ProbeTarget::Cache => Probe::Cache,
            ProbeTarget::Queue => Probe::Queue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_records_defaults() {
        let cli = Cli::try_parse_from(["ars", "records"]).unwrap();
        match cli.command {
            Commands::Records { page, size } => {
                assert_eq!(page, 1);
                assert_eq!(size, 10);
            }
            _ => panic!("records expected"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ars",
            "probe",
            "queue",
            "-v",
            "--base-url",
            "http://localhost:8080/hktv_ars",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/hktv_ars"));
        match cli.command {
            Commands::Probe { target } => assert_eq!(Probe::from(target), Probe::Queue),
            _ => panic!("probe expected"),
        }
    }

    #[test]
    fn test_analyze_requires_address() {
        assert!(Cli::try_parse_from(["ars", "analyze"]).is_err());
    }
}
