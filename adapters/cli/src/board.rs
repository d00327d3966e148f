//! Plain-text rendering of the castle map.

use castle_defender_core::{CastleMap, CellCoord, Enemy, Guard, Terrain};

const WALL: char = '#';
const PATH: char = '.';
const EMPTY: char = ' ';
const GATE: char = '+';
const KEEP: char = '@';
const ROUTE: char = '*';

/// Renders the map with guards, enemy spawns and breaching routes overlaid.
///
/// Guards win over enemies, which win over route markers, which win over
/// terrain.
pub(crate) fn render(map: &CastleMap, guards: &[Guard], enemies: &[Enemy]) -> String {
    let mut glyphs: Vec<char> = (0..map.cell_count())
        .map(|index| {
            map.cell_at(index)
                .and_then(|cell| map.terrain(cell))
                .map_or(WALL, terrain_glyph)
        })
        .collect();

    for enemy in enemies.iter().filter(|enemy| enemy.reached_keep) {
        for &cell in &enemy.path {
            if let Some(index) = map.index(cell) {
                if cell != map.keep() {
                    glyphs[index] = ROUTE;
                }
            }
        }
    }
    for enemy in enemies {
        stamp(map, &mut glyphs, enemy.current, enemy.kind.glyph());
    }
    for guard in guards {
        stamp(map, &mut glyphs, guard.cell, guard.kind.glyph());
    }

    let size = map.size() as usize;
    let mut rendered = String::with_capacity(glyphs.len() + size);
    for row in glyphs.chunks(size.max(1)) {
        rendered.extend(row.iter());
        rendered.push('\n');
    }
    rendered
}

/// Describes how a resolved enemy fared, one line per enemy.
pub(crate) fn outcome(enemy: &Enemy) -> String {
    let origin = format!(
        "{} {} from the {} gate",
        enemy.kind.label(),
        enemy.id.get(),
        enemy.gate.label()
    );
    if enemy.blocked {
        format!("{origin}: blocked")
    } else if enemy.reached_keep {
        format!("{origin}: breached in {} steps", enemy.remaining_steps())
    } else {
        format!("{origin}: stranded after {} steps", enemy.remaining_steps())
    }
}

fn stamp(map: &CastleMap, glyphs: &mut [char], cell: CellCoord, glyph: char) {
    if let Some(index) = map.index(cell) {
        glyphs[index] = glyph;
    }
}

fn terrain_glyph(terrain: Terrain) -> char {
    match terrain {
        Terrain::Wall => WALL,
        Terrain::Path => PATH,
        Terrain::Empty => EMPTY,
        Terrain::Gate(_) => GATE,
        Terrain::Keep => KEEP,
    }
}
