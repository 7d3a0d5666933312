//! Records failures to a JSON Lines file.
//!
//! Run with `cargo run --example recorder --features recorder`.

use std::sync::Arc;

use mimicry::{
    EventHandler, Invocation, Location, NoMoreInvocations, Result, Session, handlers::Recorder,
};

fn main() -> Result {
    let path = std::env::temp_dir().join("mimicry_failures.jsonl");
    let mut session = Session::new().with_handler(Recorder::new(&path)?);

    let unverified: Vec<Arc<dyn Invocation>> = (1..=7)
        .map(|i| Arc::new(format!("Cache::get({i})")) as Arc<dyn Invocation>)
        .collect();
    session.handle(&NoMoreInvocations::new(Location::caller(), unverified).into())?;

    print!("{}", std::fs::read_to_string(&path)?);
    Ok(())
}
