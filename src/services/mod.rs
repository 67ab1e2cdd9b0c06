pub mod generation;

#[cfg(test)]
mod generation_test;
