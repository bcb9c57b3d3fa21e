use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::JNIEnv;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input string: {0}")]
    InvalidInput(#[from] jni::errors::Error),
}

/**
 * Native backing for `GoogleSignInActivity.stringMethod`: greets the given
 * string and hands a freshly-created Java string back to the caller.
 *
 * On failure (null or unreadable input) an IllegalArgumentException is
 * pending on return and the returned jstring is null.
 */
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_tbse_arvectorfields_GoogleSignInActivity_stringMethod(
    env: JNIEnv,
    _this: JObject,
    input: JString,
) -> jstring {
    match string_method(&env, input) {
        Ok(greeting) => greeting,
        Err(err) => {
            throw(&env, &err);
            std::ptr::null_mut()
        }
    }
}

fn string_method(env: &JNIEnv, input: JString) -> Result<jstring, Error> {
    // borrows the Java string's UTF chars only until the guard drops
    let name: String = env.get_string(input)?.into();
    let greeting = greeting::format_greeting(&name);
    Ok(env.new_string(greeting)?.into_inner())
}

fn throw(env: &JNIEnv, err: &Error) {
    match env.throw_new("java/lang/IllegalArgumentException", err.to_string()) {
        Ok(()) => (),
        Err(throw_err) => eprintln!("Failed to throw exception: {}", throw_err),
    }
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(
    _vm: *mut jni::sys::JavaVM,
    _reserved: *mut std::os::raw::c_void,
) -> jint {
    init_logging();
    JNI_VERSION_1_6
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("native_lib"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    match env_logger::try_init() {
        Ok(()) => (),
        Err(err) => eprintln!("Failed to initialize logger: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn invalid_input_message_test() {
        let err = Error::InvalidInput(jni::errors::Error::NullPtr("get_string obj argument"));
        assert!(err.to_string().starts_with("Invalid input string: "));
    }
}
