//! Path lookups into JSON values.
//!
//! Paths are dot-separated keys. A numeric segment indexes an array, `#`
//! yields an array's length, and `#` followed by more segments maps the
//! rest of the path over every element. `\.` escapes a literal dot.

use serde_json::Value;

/// Look up `path` in `value`. Returns `None` when nothing matches.
pub fn get(value: &Value, path: &str) -> Option<Value> {
    let segments = split(path);
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    lookup(value, &segments)
}

fn lookup(value: &Value, segments: &[&str]) -> Option<Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Some(value.clone());
    };

    match value {
        Value::Object(map) => map.get(*segment).and_then(|child| lookup(child, rest)),
        Value::Array(items) if *segment == "#" => {
            if rest.is_empty() {
                Some(Value::from(items.len()))
            } else {
                let mapped = items.iter().filter_map(|item| lookup(item, rest)).collect();
                Some(Value::Array(mapped))
            }
        }
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index))
            .and_then(|child| lookup(child, rest)),
        _ => None,
    }
}

fn split(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'.') => {
                current.push('.');
                chars.next();
            }
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

/// Rewrite `a[key]` map access as `a.key`.
///
/// Bracketed segments containing `?` or `@` are filter expressions and are
/// left untouched.
pub fn convert_map_access(path: &str) -> String {
    let mut result = path.to_string();
    let mut search_start = 0;

    while let Some(offset) = result[search_start..].find('[') {
        let start = search_start + offset;
        let Some(length) = result[start..].find(']') else {
            break;
        };
        let end = start + length;
        let key = result[start + 1..end].to_string();

        if key.contains('?') || key.contains('@') {
            search_start = end + 1;
            continue;
        }

        result = format!("{}.{}{}", &result[..start], key, &result[end + 1..]);
        search_start = start + 1 + key.len();
    }

    result
}
