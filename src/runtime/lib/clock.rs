use std::time::{SystemTime, UNIX_EPOCH};

use super::{NativeFun, Panic, Value};


inventory::submit! {
	NativeFun {
		name: "clock",
		arity: 0,
		call: clock,
	}
}


/// Seconds elapsed since the Unix epoch.
fn clock(_args: &[Value]) -> Result<Value, Panic> {
	let elapsed = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|duration| duration.as_secs_f64())
		.unwrap_or_default();

	Ok(elapsed.into())
}
