mod finder;

#[cfg(test)]
mod tests;

pub use finder::get_min_max;
