/// Describes where a log call was made.
///
/// Is usually created with the [`call_site!`](crate::call_site) macro,
/// which is also used by the emit macros [`error!`](crate::error), [`warning!`](crate::warning),
/// [`debug!`](crate::debug) and [`info!`](crate::info).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite<'a> {
    method: &'a str,
    class: &'a str,
    line: u32,
}
impl<'a> CallSite<'a> {
    /// Constructs a call site from its parts.
    #[must_use]
    pub const fn new(method: &'a str, class: &'a str, line: u32) -> Self {
        Self {
            method,
            class,
            line,
        }
    }

    /// Name of the function that issued the log call.
    #[must_use]
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// Module path of the code that issued the log call.
    #[must_use]
    pub fn class(&self) -> &'a str {
        self.class
    }

    /// Source line of the log call.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    // A log::Record has no function name; a target that differs from the module path
    // is the best we can get.
    pub(crate) fn from_record(record: &'a log::Record<'_>) -> Self {
        let class = record.module_path().unwrap_or_else(|| record.target());
        let method = if record.target() == class {
            "-"
        } else {
            record.target()
        };
        Self::new(method, class, record.line().unwrap_or(0))
    }
}

/// Reduces the type name of a helper fn item, defined within some function,
/// to the name of that function.
///
/// `my_crate::worker::run::{{closure}}::f` becomes `run`.
#[doc(hidden)]
#[must_use]
pub fn enclosing_fn(type_name: &str) -> &str {
    let mut path = type_name.strip_suffix("::f").unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Name of the enclosing function, used by [`call_site!`](crate::call_site).
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::enclosing_fn(type_name_of(f))
    }};
}

/// Captures the [`CallSite`] of its invocation:
/// the enclosing function, the module path, and the line.
///
/// ```rust
/// let site = loglib::call_site!();
/// assert_eq!(site.class(), module_path!());
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            $crate::__function_name!(),
            ::std::module_path!(),
            ::std::line!(),
        )
    };
}

/// Writes an `ERROR` line with the call site of the invocation.
///
/// ```rust,ignore
/// loglib::error!(handle, "cannot open {}", path.display());
/// ```
#[macro_export]
macro_rules! error {
    ($handle:expr, $($arg:tt)+) => {
        $handle.error(&$crate::call_site!(), &::std::format!($($arg)+))
    };
}

/// Writes a `WARNING` line with the call site of the invocation.
#[macro_export]
macro_rules! warning {
    ($handle:expr, $($arg:tt)+) => {
        $handle.warning(&$crate::call_site!(), &::std::format!($($arg)+))
    };
}

/// Writes a `DEBUG` line with the call site of the invocation.
#[macro_export]
macro_rules! debug {
    ($handle:expr, $($arg:tt)+) => {
        $handle.debug(&$crate::call_site!(), &::std::format!($($arg)+))
    };
}

/// Writes an `INFO` line with the call site of the invocation.
#[macro_export]
macro_rules! info {
    ($handle:expr, $($arg:tt)+) => {
        $handle.info(&$crate::call_site!(), &::std::format!($($arg)+))
    };
}

#[cfg(test)]
mod test {
    use super::enclosing_fn;

    #[test]
    fn test_enclosing_fn() {
        assert_eq!(enclosing_fn("my_crate::worker::run::f"), "run");
        assert_eq!(enclosing_fn("my_crate::worker::run::{{closure}}::f"), "run");
        assert_eq!(
            enclosing_fn("my_crate::Worker::start::{{closure}}::{{closure}}::f"),
            "start"
        );
        assert_eq!(enclosing_fn("main::f"), "main");
    }

    #[test]
    fn test_call_site_macro() {
        let line = line!() + 1;
        let site = crate::call_site!();
        assert_eq!(site.method(), "test_call_site_macro");
        assert_eq!(site.class(), "loglib::call_site::test");
        assert_eq!(site.line(), line);

        let in_closure = || crate::call_site!();
        assert_eq!(in_closure().method(), "test_call_site_macro");
    }

    #[test]
    fn test_from_record() {
        let record = log::Record::builder()
            .target("db")
            .module_path(Some("app::store"))
            .line(Some(17))
            .build();
        let site = super::CallSite::from_record(&record);
        assert_eq!((site.method(), site.class(), site.line()), ("db", "app::store", 17));

        let record = log::Record::builder()
            .target("app::store")
            .module_path(Some("app::store"))
            .build();
        let site = super::CallSite::from_record(&record);
        assert_eq!((site.method(), site.class(), site.line()), ("-", "app::store", 0));
    }
}
