//! # DirCreationQueue
//!
//! 目录创建去重队列，基于 `tokio::sync::Mutex` + `watch` 实现。
//!
//! 写入在父目录缺失时需要先建目录再重试；当多个写入并发命中同一个
//! 缺失目录时，创建请求只应发出一次，其余调用者挂到同一个完成信号上。
//!
//! ## 并发保证
//! - 同一路径同一时刻至多一个创建在途，查询与登记在一次加锁内完成
//! - 在途表只保存进行中的条目，结束后无条件移除（无论成功失败）
//! - 创建失败由执行方内部消化，等待者只关心「结束了」这一事实
//!
//! 归属于单个客户端实例，多个客户端实例（多个远端配置）互不干扰。

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::{Mutex, watch};

#[derive(Debug, Default)]
pub struct DirCreationQueue {
    pending: Mutex<HashMap<String, watch::Receiver<bool>>>,
}

/// 一次去重裁决的结果：要么当创建者，要么当等待者
enum Role {
    Creator(watch::Sender<bool>),
    Waiter(watch::Receiver<bool>),
}

impl DirCreationQueue {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// 以去重方式执行一次目录创建。
    ///
    /// 第一个调用者执行 `create`，期间到达的同路径调用者等待同一个
    /// 完成信号；无论创建结局如何，等待者都会被唤醒。
    pub async fn run_deduplicated<F, Fut>(&self, parent_url: &str, create: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        // 一次加锁内完成查询或登记，避免两个调用者同时当上“第一个”
        let role = {
            let mut pending = self.pending.lock().await;
            match pending.get(parent_url) {
                Some(rx) => Role::Waiter(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(false);
                    pending.insert(parent_url.to_string(), rx);
                    Role::Creator(tx)
                }
            }
        };

        match role {
            Role::Waiter(mut rx) => {
                // 发送端异常消失也按结束处理，随后的重试写入会自行暴露真实错误
                let _ = rx.wait_for(|done| *done).await;
            }
            Role::Creator(tx) => {
                create().await;

                // 先移除条目再发信号，保证新来的调用者看不到已完结的条目
                self.pending.lock().await.remove(parent_url);
                let _ = tx.send(true);
            }
        }
    }

    /// 当前在途的创建数（测试与诊断用）
    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}
