//! Assertion helpers shared by the unit tests

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}
