//! Preconditions evaluated before a command runs.

pub mod guard;

#[cfg(test)]
mod test;
