/// Use cases module containing application business logic orchestration
mod refresh_screen;

pub use refresh_screen::RefreshScreenUseCase;
