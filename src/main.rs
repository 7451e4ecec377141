use falcon_fix::adapters::outbound::console::StderrProgressReporter;
use falcon_fix::adapters::outbound::filesystem::FileSystemReader;
use falcon_fix::adapters::outbound::network::{
    CachingChangelogRepository, GitHubChangelogClient, OpenAiChatClient, DEFAULT_API_BASE_URL,
    DEFAULT_MODEL,
};
use falcon_fix::application::advisor::{
    OfflineAdvisor, RecommendationService, VersionAdvisor, DEFAULT_MAX_TOOL_ROUNDS,
};
use falcon_fix::application::dto::{AnalysisRequest, AnalysisResponse, ScanInput, TreeInput};
use falcon_fix::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use falcon_fix::application::use_cases::AnalyzeVulnerabilitiesUseCase;
use falcon_fix::cli::Args;
use falcon_fix::config::{self, ConfigFile};
use falcon_fix::remediation::policies::{OverridePropertyTable, RepositoryTable};
use falcon_fix::samples;
use falcon_fix::shared::error::ExitCode;
use falcon_fix::shared::Result;
use std::process;

const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[tokio::main]
async fn main() {
    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on its own errors)
    let args = Args::parse_args();
    let config = load_config(&args)?;

    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let offline = args.offline || config.offline.unwrap_or(false);

    let request = build_request(&args, &config)?;
    let overrides = OverridePropertyTable::spring_boot()
        .with_entries(config.bom_properties.clone().unwrap_or_default());

    let response = if offline {
        eprintln!(
            "ℹ️  Offline mode: recommending the highest listed fix version for every finding"
        );
        analyze(OfflineAdvisor::new(), overrides, request, args.verbose).await?
    } else {
        let max_tool_rounds = args
            .max_tool_rounds
            .map(|rounds| rounds as usize)
            .or(config.max_tool_rounds)
            .unwrap_or(DEFAULT_MAX_TOOL_ROUNDS);
        let model = args
            .model
            .clone()
            .or_else(|| config.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base_url = config
            .api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let chat_model = OpenAiChatClient::from_env()?
            .with_model(model)
            .with_api_base_url(api_base_url);
        let repositories = RepositoryTable::default()
            .with_entries(config.github_repositories.clone().unwrap_or_default());
        let github_token = std::env::var(GITHUB_TOKEN_ENV).ok();
        let github_client = GitHubChangelogClient::new(repositories, github_token)?;
        let changelogs = CachingChangelogRepository::new(github_client);

        eprintln!("🤖 Consulting {} for version recommendations", chat_model.model());
        let advisor =
            VersionAdvisor::new(chat_model, changelogs).with_max_tool_rounds(max_tool_rounds);
        analyze(advisor, overrides, request, args.verbose).await?
    };

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(format));

    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    let cannot_upgrade = response.cannot_upgrade_count();
    if args.fail_on_critical && cannot_upgrade > 0 {
        eprintln!(
            "\n⚠️  {} vulnerabilit{} cannot be upgraded without a major version change",
            cannot_upgrade,
            if cannot_upgrade == 1 { "y" } else { "ies" }
        );
        return Ok(ExitCode::CriticalFindings);
    }

    Ok(ExitCode::Success)
}

/// Explicit `--config` wins; otherwise look for the default file in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(ref path) = args.config {
        return config::load_config_from_path(path);
    }
    let current_dir = std::env::current_dir()?;
    Ok(config::discover_config(&current_dir)?.unwrap_or_default())
}

fn build_request(args: &Args, config: &ConfigFile) -> Result<AnalysisRequest> {
    let tree = match args.tree_file {
        Some(ref path) => TreeInput::File(path.clone()),
        None => {
            eprintln!("ℹ️  No --tree-file given, using the built-in sample dependency tree");
            TreeInput::Text(samples::SAMPLE_DEPENDENCY_TREE.to_string())
        }
    };
    let scan = match args.scan_report {
        Some(ref path) => ScanInput::File(path.clone()),
        None => {
            eprintln!("ℹ️  No --scan-report given, using the built-in sample vulnerabilities");
            ScanInput::Findings(samples::sample_vulnerabilities()?)
        }
    };

    Ok(AnalysisRequest::new(
        tree,
        scan,
        config.parent_versions.clone().unwrap_or_default(),
    ))
}

async fn analyze<S: RecommendationService>(
    recommendation_service: S,
    overrides: OverridePropertyTable,
    request: AnalysisRequest,
    verbose: bool,
) -> Result<AnalysisResponse> {
    // Create adapters (Dependency Injection)
    let tree_reader = FileSystemReader::new();
    let scan_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new(verbose);

    let use_case = AnalyzeVulnerabilitiesUseCase::new(
        tree_reader,
        scan_reader,
        recommendation_service,
        progress_reporter,
        overrides,
    );
    use_case.execute(request).await
}
