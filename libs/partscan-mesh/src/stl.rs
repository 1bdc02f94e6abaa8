//! # STL Parsing
//!
//! Binary and ASCII STL parsing into a [`TriangleMesh`].
//!
//! Binary layout: 80-byte header, little-endian `u32` triangle count,
//! then 50 bytes per triangle (normal + three vertices as 3xf32 each,
//! plus a 2-byte attribute marker). The facet normal is repeated once
//! per vertex so the normal buffer parallels the position buffer.

use crate::error::MeshError;
use crate::mesh::TriangleMesh;
use glam::DVec3;

/// Bytes before the first triangle record (header + triangle count).
const BINARY_PREAMBLE_LEN: usize = 84;
/// Bytes per binary triangle record.
const BINARY_TRIANGLE_LEN: usize = 50;

/// Parses STL bytes, auto-detecting the binary and ASCII variants.
///
/// A buffer whose length matches the binary layout exactly is binary
/// (ASCII exports can legitimately start with `solid`, and so can binary
/// headers). Otherwise a buffer whose first token is `solid` is parsed
/// as ASCII. Anything else is treated as binary and reported through the
/// binary parser's errors.
pub fn parse_stl(data: &[u8]) -> Result<TriangleMesh, MeshError> {
    if binary_size_matches(data) {
        return parse_binary(data);
    }
    if has_ascii_prefix(data) {
        return parse_ascii(data);
    }
    parse_binary(data)
}

fn binary_size_matches(data: &[u8]) -> bool {
    if data.len() < BINARY_PREAMBLE_LEN {
        return false;
    }
    let triangle_count = read_triangle_count(data);
    triangle_count
        .checked_mul(BINARY_TRIANGLE_LEN)
        .and_then(|bytes| bytes.checked_add(BINARY_PREAMBLE_LEN))
        == Some(data.len())
}

fn has_ascii_prefix(data: &[u8]) -> bool {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    let trimmed = &data[start..];
    trimmed.len() >= 5 && trimmed[..5].eq_ignore_ascii_case(b"solid")
}

fn read_triangle_count(data: &[u8]) -> usize {
    u32::from_le_bytes([data[80], data[81], data[82], data[83]]) as usize
}

/// Parses the binary little-endian triangle-soup layout.
pub fn parse_binary(data: &[u8]) -> Result<TriangleMesh, MeshError> {
    if data.len() < BINARY_PREAMBLE_LEN {
        return Err(MeshError::parse_failure(
            "buffer too small for STL header and triangle count",
        ));
    }

    let triangle_count = read_triangle_count(data);
    let expected = triangle_count
        .checked_mul(BINARY_TRIANGLE_LEN)
        .and_then(|bytes| bytes.checked_add(BINARY_PREAMBLE_LEN))
        .ok_or_else(|| MeshError::parse_failure("triangle count overflows buffer size"))?;
    if data.len() < expected {
        return Err(MeshError::ParseFailure {
            message: format!(
                "truncated STL: expected {expected} bytes for {triangle_count} triangles, got {}",
                data.len()
            ),
        });
    }

    let mut positions = Vec::with_capacity(triangle_count * 3);
    let mut normals = Vec::with_capacity(triangle_count * 3);

    let mut offset = BINARY_PREAMBLE_LEN;
    for _ in 0..triangle_count {
        let normal = read_vec3(data, offset);
        offset += 12;

        for _ in 0..3 {
            positions.push(read_vec3(data, offset));
            normals.push(normal);
            offset += 12;
        }

        offset += 2; // attribute byte count
    }

    Ok(TriangleMesh::with_normals(positions, normals))
}

/// Parses the ASCII `solid`/`facet`/`vertex` keyword grammar.
pub fn parse_ascii(data: &[u8]) -> Result<TriangleMesh, MeshError> {
    let text = std::str::from_utf8(data)
        .map_err(|_| MeshError::parse_failure("ASCII STL is not valid UTF-8"))?;
    let mut tokens = text.split_whitespace();

    match tokens.next() {
        Some(t) if t.eq_ignore_ascii_case("solid") => {}
        _ => return Err(MeshError::parse_failure("ASCII STL must start with \"solid\"")),
    }

    // The solid name may span several tokens; consume up to the first keyword.
    let mut keyword = loop {
        match tokens.next() {
            Some(t) if t.eq_ignore_ascii_case("facet") || t.eq_ignore_ascii_case("endsolid") => {
                break t
            }
            Some(_) => {}
            None => return Err(MeshError::parse_failure("ASCII STL ended before endsolid")),
        }
    };

    let mut positions = Vec::new();
    let mut normals = Vec::new();

    while !keyword.eq_ignore_ascii_case("endsolid") {
        expect_keyword(&mut tokens, "normal")?;
        let normal = read_ascii_vec3(&mut tokens)?;
        expect_keyword(&mut tokens, "outer")?;
        expect_keyword(&mut tokens, "loop")?;

        for _ in 0..3 {
            expect_keyword(&mut tokens, "vertex")?;
            positions.push(read_ascii_vec3(&mut tokens)?);
            normals.push(normal);
        }

        expect_keyword(&mut tokens, "endloop")?;
        expect_keyword(&mut tokens, "endfacet")?;

        keyword = match tokens.next() {
            Some(t) if t.eq_ignore_ascii_case("facet") || t.eq_ignore_ascii_case("endsolid") => t,
            Some(t) => {
                return Err(MeshError::ParseFailure {
                    message: format!("expected \"facet\" or \"endsolid\" in ASCII STL, found {t:?}"),
                })
            }
            None => return Err(MeshError::parse_failure("ASCII STL ended before endsolid")),
        };
    }

    Ok(TriangleMesh::with_normals(positions, normals))
}

fn expect_keyword<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    keyword: &str,
) -> Result<(), MeshError> {
    match tokens.next() {
        Some(t) if t.eq_ignore_ascii_case(keyword) => Ok(()),
        Some(t) => Err(MeshError::ParseFailure {
            message: format!("expected {keyword:?} in ASCII STL, found {t:?}"),
        }),
        None => Err(MeshError::ParseFailure {
            message: format!("expected {keyword:?} in ASCII STL, found end of input"),
        }),
    }
}

fn read_ascii_vec3<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<DVec3, MeshError> {
    let mut components = [0.0_f64; 3];
    for component in &mut components {
        let token = tokens.next().ok_or_else(|| {
            MeshError::parse_failure("expected coordinate in ASCII STL, found end of input")
        })?;
        // STL carries f32 precision in both variants
        let value = token.parse::<f32>().map_err(|_| MeshError::ParseFailure {
            message: format!("invalid coordinate in ASCII STL: {token:?}"),
        })?;
        *component = f64::from(value);
    }
    Ok(DVec3::from_array(components))
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_vec3(data: &[u8], offset: usize) -> DVec3 {
    DVec3::new(
        f64::from(read_f32(data, offset)),
        f64::from(read_f32(data, offset + 4)),
        f64::from(read_f32(data, offset + 8)),
    )
}
