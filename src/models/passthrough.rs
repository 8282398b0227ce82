//! # 저장된 필드를 그대로 전달하는 타입
//!
//! 상품/카테고리 문서는 이 서비스 밖에서 작성되므로, 타입을 정하지 않은 필드는
//! BSON 그대로 받아 JSON 응답에 그대로 내보냅니다.
//!
//! serde_json으로 `Document`를 직접 직렬화하면 ObjectId와 날짜가
//! `{"$oid": ...}`, `{"$date": ...}` 형태(Extended JSON)로 나옵니다.
//! 여기서는 각각 16진수 문자열과 RFC 3339 문자열로 바꿔 평범한 JSON을 만듭니다.

use mongodb::bson::{Bson, Document};
use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::{Deref, DerefMut};

/// `#[serde(flatten)]`으로 붙여 쓰는 나머지 필드 묶음
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passthrough(pub Document);

impl From<Document> for Passthrough {
    fn from(doc: Document) -> Self {
        Self(doc)
    }
}

impl Deref for Passthrough {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.0
    }
}

impl DerefMut for Passthrough {
    fn deref_mut(&mut self) -> &mut Document {
        &mut self.0
    }
}

impl<'de> Deserialize<'de> for Passthrough {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Document::deserialize(deserializer).map(Self)
    }
}

impl Serialize for Passthrough {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0.iter() {
            map.serialize_entry(key, &plain_json(value))?;
        }
        map.end()
    }
}

/// `Option<Bson>` 필드용 `serialize_with` 헬퍼
pub fn serialize_plain<S: Serializer>(
    value: &Option<Bson>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => plain_json(value).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// BSON 값을 드라이버 밖에서 흔히 쓰는 JSON 표현으로 바꿉니다.
///
/// 나머지 타입은 relaxed Extended JSON 규칙을 따릅니다 (정수/실수는 그냥 숫자).
pub fn plain_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(date) => match date.try_to_rfc3339_string() {
            Ok(iso) => Value::String(iso),
            Err(_) => value.clone().into_relaxed_extjson(),
        },
        Bson::Document(doc) => Value::Object(
            doc.iter()
                .map(|(key, value)| (key.clone(), plain_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.iter().map(plain_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}
