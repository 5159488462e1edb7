use iced::canvas::{self, Cache, Cursor, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Size};
use log::debug;
use palette::{Hsl, IntoColor, Srgb};
use rand::Rng;

use crate::settings::BackdropSettings;
use crate::style;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Bounds { width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Maps a point in these bounds onto a drawing surface of `size`.
    pub fn project(&self, point: Point, size: Size) -> Point {
        Point::new(
            point.x / self.width * size.width,
            point.y / self.height * size.height,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Color,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, bounds: Bounds, settings: &BackdropSettings) -> Self {
        let hue = sample(rng, settings.hue_start, settings.hue_start + settings.hue_span);
        Particle {
            x: sample(rng, 0.0, bounds.width),
            y: sample(rng, 0.0, bounds.height),
            vx: sample(rng, -settings.max_speed, settings.max_speed),
            vy: sample(rng, -settings.max_speed, settings.max_speed),
            size: sample(rng, settings.min_size, settings.max_size),
            color: hsl(hue, settings.saturation, settings.lightness),
        }
    }

    /// Moves the particle one frame and turns it around on the axis it
    /// left the bounds through. Position is never clamped.
    pub fn advance(&mut self, bounds: Bounds) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 {
            self.vx = self.vx.abs();
        } else if self.x > bounds.width {
            self.vx = -self.vx.abs();
        }

        if self.y < 0.0 {
            self.vy = self.vy.abs();
        } else if self.y > bounds.height {
            self.vy = -self.vy.abs();
        }
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub opacity: f32,
}

/// Fully opaque when touching, fully transparent at `max_distance` and beyond.
pub fn link_opacity(distance: f32, max_distance: f32) -> f32 {
    (1.0 - distance / max_distance).max(0.0)
}

/// Every unordered pair closer than `max_distance`.
pub fn links(particles: &[Particle], max_distance: f32) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(i, a)| {
        particles[i + 1..].iter().filter_map(move |b| {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < max_distance {
                Some(Link {
                    from: a.position(),
                    to: b.position(),
                    opacity: link_opacity(distance, max_distance),
                })
            } else {
                None
            }
        })
    })
}

pub struct Backdrop {
    particles: Vec<Particle>,
    bounds: Bounds,
    link_distance: f32,
    link_width: f32,
    cache: Cache,
}

impl Backdrop {
    pub fn spawn(settings: &BackdropSettings, bounds: Bounds) -> Option<Self> {
        Self::spawn_with(&mut rand::thread_rng(), settings, bounds)
    }

    pub fn spawn_with<R: Rng>(
        rng: &mut R,
        settings: &BackdropSettings,
        bounds: Bounds,
    ) -> Option<Self> {
        if !settings.enabled {
            debug!("backdrop disabled, skipping");
            return None;
        }
        if bounds.is_degenerate() {
            debug!("no drawing area for backdrop ({:?}), skipping", bounds);
            return None;
        }

        let particles = (0..settings.particle_count)
            .map(|_| Particle::random(rng, bounds, settings))
            .collect();

        Some(Backdrop {
            particles,
            bounds,
            link_distance: settings.link_distance,
            link_width: settings.link_width,
            cache: Cache::default(),
        })
    }

    pub fn advance(&mut self) {
        let bounds = self.bounds;
        for particle in self.particles.iter_mut() {
            particle.advance(bounds);
        }
        self.cache.clear();
    }

    /// Takes the new viewport size as is; particles outside it find their
    /// way back on their own.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.cache.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl<Message> canvas::Program<Message> for Backdrop {
    fn draw(&self, bounds: Rectangle, _cursor: Cursor) -> Vec<Geometry> {
        let geometry = self.cache.draw(bounds.size(), |frame| {
            let background = Path::rectangle(Point::ORIGIN, frame.size());
            frame.fill(&background, style::SURFACE);

            if self.bounds.is_degenerate() {
                return;
            }
            let size = frame.size();

            for particle in self.particles.iter() {
                let center = self.bounds.project(particle.position(), size);
                let circle = Path::circle(center, particle.size);
                frame.fill(&circle, particle.color);
            }

            for link in links(&self.particles, self.link_distance) {
                let line = Path::new(|builder| {
                    builder.move_to(self.bounds.project(link.from, size));
                    builder.line_to(self.bounds.project(link.to, size));
                });
                frame.stroke(
                    &line,
                    Stroke {
                        color: Color {
                            a: link.opacity,
                            ..style::ACCENT
                        },
                        width: self.link_width,
                        ..Stroke::default()
                    },
                );
            }
        });

        vec![geometry]
    }
}

fn sample<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let color: Hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = color.into_color();
    Color::from_rgb(rgb.red, rgb.green, rgb.blue)
}
