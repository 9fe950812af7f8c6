pub mod lookup;

pub use lookup::LookupRecordsUseCase;
