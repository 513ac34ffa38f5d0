pub mod dome;
