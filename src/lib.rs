pub mod accumulator;
pub mod conveyor;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod heading;
pub mod interpreter;
pub mod layer;
pub mod metrics;
pub mod operator;
pub mod sink;
pub mod survey;
pub mod value;
