// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod errors;
pub mod forms;
pub mod ids;
pub mod list;
pub mod model;
pub mod state;

pub use errors::*;
pub use forms::*;
pub use ids::*;
pub use list::*;
pub use model::*;
pub use state::*;
