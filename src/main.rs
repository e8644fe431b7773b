use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use ev_cost_calculator::{
    app::{self, AppError, CompareRequest},
    config, logging, ui_cli,
};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "ev_cost_calculator_cli", version, about = "EV vs combustion running-cost calculator")]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 대화형 메뉴 (기본)
    Interactive,
    /// 입력값으로 한 번 계산하고 결과를 출력
    Compare {
        /// 전기차 소비량 [kWh/100km]
        #[arg(long)]
        kwh: String,
        #[arg(long)]
        electricity_price: Option<String>,
        #[arg(long)]
        gasoline_price: Option<String>,
        #[arg(long)]
        diesel_price: Option<String>,
        /// NAME:CONSUMPTION:FUEL (최대 4개, 생략 시 기본 차량)
        #[arg(long = "vehicle")]
        vehicles: Vec<String>,
    },
    /// 예시 전기차 소비량 목록
    Examples,
    /// 기본 설정 파일 생성
    InitConfig,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택된 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config);
    let configured_filter = cfg.as_ref().ok().and_then(|c| c.log_filter.clone());
    logging::init_logger(cli.verbose, configured_filter.as_deref());
    let cfg = cfg?;
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => app::run(&cfg)?,
        Command::Compare {
            kwh,
            electricity_price,
            gasoline_price,
            diesel_price,
            vehicles,
        } => {
            let request = CompareRequest {
                kwh_per_100km: kwh,
                electricity_price,
                gasoline_price,
                diesel_price,
                vehicles,
            };
            app::run_compare(&cfg, &request)?
        }
        Command::Examples => ui_cli::print_examples(),
        Command::InitConfig => config::Config::default().save(&cli.config)?,
    }
    Ok(())
}
