pub mod conf;
pub mod view;

#[cfg(test)]
mod tests;
