//! End-to-end workflows of the SharedBox client against a stub server.

#[cfg(test)]
mod tests;
