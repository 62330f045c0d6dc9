pub mod run;
pub mod species;
