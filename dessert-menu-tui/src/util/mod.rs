//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     mod logging;        // 日志文件初始化
//!     mod terminal;       // 终端初始化和恢复
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 应用在备用屏幕运行，退出后恢复主屏幕内容
//!         - 因此日志写入文件，而不是 stderr
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
