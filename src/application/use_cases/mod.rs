/// Use cases module containing application business logic orchestration
mod analyze_rot;

pub use analyze_rot::AnalyzeRotUseCase;
