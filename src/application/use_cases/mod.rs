/// Use cases module containing application business logic orchestration
mod analyze_vulnerabilities;

pub use analyze_vulnerabilities::AnalyzeVulnerabilitiesUseCase;
