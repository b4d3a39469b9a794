//! JSONフォーマッター
//!
//! 保存済みオブジェクトとの互換性のため、要素区切りに`", "`、
//! キーと値の区切りに`": "`を使う1行形式でJSONを出力する。
//! 例: `{"example_key": "example_value"}`

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// 区切り文字の後ろに空白を1つ入れる1行JSONフォーマッター
///
/// 改行やインデントは入れない。
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// 値を`SpacedFormatter`形式のバイト列にシリアライズする
pub fn to_spaced_vec<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}
