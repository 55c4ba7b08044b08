/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::store::*;

pub mod config {
    use crate::internal;
    pub use internal::config::structs::remote_config::RemoteConfig;
    pub use internal::config::traits::config_provider::{ConfigProvider, StaticConfigProvider};
}

/// 对外提供传输层抽象，方便调用方注入自己的 HTTP 栈或在测试中替换
pub mod transport {
    use crate::internal;
    pub use internal::transport::structs::{
        HttpRequest, HttpResponse, ReqwestTransport, TransportError,
    };
    pub use internal::transport::traits::transport::Transport;
}

/// 对外提供 webdav 基础类型，不限制死在客户端内部，以防有人自己要用
pub mod webdav {
    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod functions {
        use crate::internal;
        pub use internal::webdav::functions::build_full_path::*;
        pub use internal::webdav::functions::clean_revision::*;
        pub use internal::webdav::functions::http_date::*;
    }

    pub mod traits {
        pub use crate::internal::webdav::raw_xml::impl_multi_status::*;
    }

    pub mod structs {
        pub use crate::internal::webdav::raw_xml::raw_file::*;
    }
}

pub mod remote_file {
    use crate::internal;
    // 结构体模型与错误类型
    pub use internal::remote_file::structs::file_meta::*;
    pub use internal::remote_file::structs::outcomes::*;
    pub use internal::remote_file::structs::remote_error::*;
    // 客户端本体（四个公开操作都在它上面）
    pub use internal::remote_file::structs::remote_file_store::*;
}

pub mod states {
    pub mod dir_creation_queue {
        use crate::internal;
        pub use internal::states::dir_creation_queue::*;
    }
}
