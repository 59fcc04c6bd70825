// src/macros.rs
#[macro_export]
macro_rules! s {
    // () → String::new()
    () => {
        ::std::string::String::new()
    };
    // Literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate &str pieces into one String (URLs, paths, labels)
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! or_dash {
    // Option<impl Into<String>> → value or the "-" placeholder
    ($opt:expr) => {
        match $opt {
            ::std::option::Option::Some(v) => ::std::string::String::from(v),
            ::std::option::Option::None => $crate::config::consts::PLACEHOLDER.to_string(),
        }
    };
}
