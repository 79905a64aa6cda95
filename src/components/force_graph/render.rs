use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_tooltip(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);
	let t = ease_out_cubic(state.hover.highlight_t);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let (r1, r2) = (n1.data.user_data.radius, n2.data.user_data.radius);
		let is_highlighted = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());

		// Highlighted edges brighten while the rest dim out.
		let (edge_alpha, width) = if is_highlighted {
			(0.6 + 0.3 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.6 - 0.45 * t, line_width * (1.0 - 0.3 * t))
		};

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.set_stroke_style_str(&format!("rgba(100, 180, 255, {})", edge_alpha));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow_size), y2 - uy * (r2 + arrow_size));
		ctx.stroke();

		// Directed arrowhead at the target end.
		ctx.set_fill_style_str(&format!("rgba(100, 180, 255, {})", edge_alpha));
		let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);

		let highlighted = state.is_highlighted(idx);
		let (alpha, radius) = if has_highlight && !highlighted {
			(1.0 - 0.7 * t, info.radius * (1.0 - 0.15 * t))
		} else if highlighted {
			(1.0, info.radius * (1.0 + 0.25 * t))
		} else {
			(1.0, info.radius)
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();

		if state.hover.node == Some(idx) && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha * 0.8));
		ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
		let _ = ctx.fill_text(&info.label, x + radius + 3.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	});
}

/// Decoded properties of the hovered node, drawn as a small panel beside it.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some((x, y, info)) = state.hovered_info() else {
		return;
	};
	if info.properties.is_empty() || state.hover.highlight_t < 0.5 {
		return;
	}

	let k = state.transform.k;
	let (line_height, font_size, pad) = (14.0 / k, 11.0 / k, 6.0 / k);
	let lines: Vec<String> = info
		.properties
		.iter()
		.map(|(key, value)| format!("{key}: {value}"))
		.collect();

	let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as f64 * font_size * 0.6;
	let height = lines.len() as f64 * line_height + pad * 2.0;
	let (bx, by) = (x + info.radius + 12.0 / k, y - height / 2.0);

	ctx.set_fill_style_str("rgba(20, 20, 40, 0.9)");
	ctx.fill_rect(bx, by, width + pad * 2.0, height);

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
	ctx.set_font(&format!("{font_size}px sans-serif"));
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, bx + pad, by + pad + (i as f64 + 0.8) * line_height);
	}
}
