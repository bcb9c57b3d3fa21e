/** The fixed prefix applied to every greeting. */
pub const GREETING_PREFIX: &str = "Hello ";

/**
 * Builds the greeting for `name`: the greeting prefix followed by the name,
 * byte for byte, with nothing appended.
 *
 * The result is logged at info level before it is returned.
 */
pub fn format_greeting(name: &str) -> String {
    let mut greeting = String::with_capacity(GREETING_PREFIX.len() + name.len());
    greeting.push_str(GREETING_PREFIX);
    greeting.push_str(name);
    log::info!("{}", greeting);
    return greeting;
}
