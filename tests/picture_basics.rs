use pixel_tiles::{Color, Picture, PictureError, PixelChange, Position, TileDimensions};

fn test_picture() -> Picture {
    Picture::empty(TileDimensions::new(2, 1), Color::BACKGROUND)
}

fn change(x: i32, y: i32, color: Color) -> PixelChange {
    PixelChange { x, y, color }
}

#[test]
fn test_draw_applies_changes_in_order() {
    let picture = test_picture();
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);

    let drawn = picture
        .draw(&[change(1, 1, red), change(2, 2, red), change(1, 1, blue)])
        .unwrap();

    // the later change to (1, 1) wins
    assert_eq!(drawn.pixel(Position::new(1, 1)).unwrap(), blue);
    assert_eq!(drawn.pixel(Position::new(2, 2)).unwrap(), red);

    // every untouched cell keeps its old color
    for y in 0..8 {
        for x in 0..16 {
            let pos = Position::new(x, y);
            if pos != Position::new(1, 1) && pos != Position::new(2, 2) {
                assert_eq!(drawn.pixel(pos).unwrap(), picture.pixel(pos).unwrap());
            }
        }
    }
}

#[test]
fn test_draw_never_mutates_the_original() {
    let picture = test_picture();
    let before = picture.clone();
    let _ = picture.draw(&[change(0, 0, Color::BLACK)]).unwrap();
    assert_eq!(picture, before);
}

#[test]
fn test_draw_with_no_changes_is_equal() {
    let picture = test_picture();
    assert_eq!(picture.draw(&[]).unwrap(), picture);
}

#[test]
fn test_out_of_bounds_change_rejects_the_batch() {
    let picture = test_picture();
    let err = picture
        .draw(&[change(0, 0, Color::BLACK), change(16, 0, Color::BLACK)])
        .unwrap_err();
    assert_eq!(
        err,
        PictureError::OutOfBounds {
            x: 16,
            y: 0,
            width: 16,
            height: 8
        }
    );
}

#[test]
fn test_pictures_from_tiles_match_tile_counts() {
    for (tx, ty) in [(1, 1), (12, 6), (3, 7)] {
        let tiles = TileDimensions::new(tx, ty);
        let picture = Picture::empty(tiles, Color::WHITE);
        assert_eq!(picture.width(), tx * 8);
        assert_eq!(picture.height(), ty * 8);
        assert_eq!(picture.pixels().len(), tx * 8 * ty * 8);
    }
}
