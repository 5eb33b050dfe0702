/// Declares each listed `async fn(&mut DbTest)` as a `#[test]` once per
/// enabled backend.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    $crate::init_tracing();
                    let mut test = $crate::DbTest::new(Box::new(
                        $crate::db::sqlite::SetupSqlite::new()
                    ));
                    $crate::block_on(super::$f(&mut test));
                }
            )*
        }

        #[cfg(feature = "sqlite")]
        mod sqlite_file {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    $crate::init_tracing();
                    let mut test = $crate::DbTest::new(Box::new(
                        $crate::db::sqlite::SetupSqliteFile::new()
                    ));
                    $crate::block_on(super::$f(&mut test));
                }
            )*
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            actual => panic!("expected `Ok`; actual={:?}", actual),
        }
    };
}

#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                let mut msg = format!("expected `Err`; actual={:?}", actual);
                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?
                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            actual => panic!("expected `None`; actual={:?}", actual),
        }
    };
}

#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {
        match &$e[..] {
            [] => {}
            actual => panic!("expected empty; actual={:?}", actual),
        }
    };
}

/// Asserts that the two collections hold the same elements in any order.
#[macro_export]
macro_rules! assert_eq_unordered {
    ($actual:expr, $expect:expr) => {{
        let mut actual: Vec<_> = $actual.into_iter().collect();
        let mut expect: Vec<_> = $expect.into_iter().collect();
        actual.sort();
        expect.sort();
        $crate::pretty_assertions::assert_eq!(actual, expect);
    }};
}
