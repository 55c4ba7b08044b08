use crate::internal::remote_file::structs::file_meta::FileMeta;
use crate::internal::webdav::functions::clean_revision::clean_revision;
use crate::internal::webdav::raw_xml::raw_file::{MultiStatus, Prop, PropStat, Response};

pub trait ToFileMeta {
    fn to_file_meta(self) -> Vec<FileMeta>;
}

fn take_ok_propstat(propstats: Vec<PropStat>) -> Option<PropStat> {
    // 从 propstats 中拿到第一个 HTTP 状态是 2xx 的 PropStat（直接 move 出来）
    propstats.into_iter().find(|ps| {
        ps.status
            .split_whitespace()
            .find_map(|t| t.parse::<u16>().ok())
            .map(|code| (200..=299).contains(&code))
            .unwrap_or(false)
    })
}

fn decode_name(display_name: Option<String>, href: &str) -> String {
    // display_name 非空就直接用（move），否则从 href 末尾提取文件名并 URL 解码
    display_name
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            percent_encoding::percent_decode_str(
                href.trim_end_matches('/').rsplit('/').next().unwrap_or(""),
            )
            .decode_utf8_lossy()
            .to_string()
        })
}

impl ToFileMeta for MultiStatus {
    /// 把多状态响应转成文件元数据列表。
    ///
    /// 目录资源与缺少 getlastmodified 的记录直接丢弃：没有修改时间就没有
    /// 版本号，这样的记录无法参与冲突检测，宁可让上层走探测回退。
    fn to_file_meta(self) -> Vec<FileMeta> {
        let mut metas = Vec::new();

        for Response { href, propstats } in self.responses.into_iter() {
            // 挑选出第一个 2xx PropStat（消耗 propstats 避免 clone）
            let ok_ps = match take_ok_propstat(propstats) {
                Some(ps) => ps,
                None => continue, // 没有 2xx 状态就跳过
            };

            let PropStat { prop, .. } = ok_ps;

            let Prop {
                resource_type,
                content_length,
                last_modified,
                content_type,
                etag,
                display_name,
            } = prop;

            // 目录不参与文件元数据
            let is_dir = resource_type
                .as_ref()
                .and_then(|rt| rt.is_collection.as_ref())
                .is_some();
            if is_dir {
                continue;
            }

            let last_modified = match last_modified.filter(|s| !s.is_empty()) {
                Some(lm) => lm,
                None => continue,
            };

            let name = decode_name(display_name, &href);

            metas.push(FileMeta {
                filename: name.clone(),
                basename: name,
                last_modified,
                size: content_length.unwrap_or(0),
                content_type: content_type
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
                etag: etag.as_deref().map(clean_revision).unwrap_or_default(),
                raw_etag: etag,
            });
        }

        metas
    }
}
