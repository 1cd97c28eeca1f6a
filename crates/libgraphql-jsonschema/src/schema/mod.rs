mod schema;

pub use schema::Schema;

#[cfg(test)]
mod tests;
