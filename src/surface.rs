use std::rc::Rc;

use trigrid::render::{HoverTarget, PathSpec, PointerEventKind, RenderSurface};
use trigrid::TrigridError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Receives every pointer event raised on a drawn element.
pub type PointerSink = Rc<dyn Fn(HoverTarget, PointerEventKind)>;

fn js_err(what: &str, e: JsValue) -> TrigridError {
    TrigridError::Surface(format!("{}: {:?}", what, e))
}

/// SVG element in the live document. Listener closures live as long as the
/// surface does.
pub struct DomSurface {
    document: Document,
    svg: Element,
    sink: PointerSink,
    listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl DomSurface {
    pub fn new(svg_id: &str, sink: PointerSink) -> Result<DomSurface, TrigridError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| TrigridError::SurfaceUnavailable("no window.document".into()))?;
        let svg = document
            .get_element_by_id(svg_id)
            .ok_or_else(|| TrigridError::SurfaceUnavailable(format!("no element with id '{}'", svg_id)))?;
        Ok(DomSurface { document, svg, sink, listeners: Vec::new() })
    }

    fn create(&self, tag: &str) -> Result<Element, TrigridError> {
        self.document.create_element_ns(Some(SVG_NS), tag).map_err(|e| js_err("createElementNS", e))
    }

    fn listen(&mut self, el: &Element, target: HoverTarget, kinds: &[PointerEventKind]) -> Result<(), TrigridError> {
        for &kind in kinds {
            let sink = Rc::clone(&self.sink);
            let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| sink(target, kind));
            el.add_event_listener_with_callback(kind.event_name(), cb.as_ref().unchecked_ref())
                .map_err(|e| js_err("addEventListener", e))?;
            self.listeners.push(cb);
        }
        Ok(())
    }
}

impl RenderSurface for DomSurface {
    type Handle = Element;

    fn is_ready(&self) -> bool {
        self.svg.is_connected()
    }

    fn create_root(&mut self) -> Result<Element, TrigridError> {
        self.create("g")
    }

    fn create_group(&mut self, parent: &Element, target: HoverTarget, listeners: &[PointerEventKind]) -> Result<Element, TrigridError> {
        let g = self.create("g")?;
        self.listen(&g, target, listeners)?;
        parent.append_child(&g).map_err(|e| js_err("appendChild", e))?;
        Ok(g)
    }

    fn create_path(&mut self, parent: &Element, spec: &PathSpec<'_>) -> Result<Element, TrigridError> {
        let path = self.create("path")?;
        path.set_attribute("d", &spec.d).map_err(|e| js_err("setAttribute", e))?;
        if let Some(stroke) = spec.stroke {
            path.set_attribute("stroke", stroke.as_str()).map_err(|e| js_err("setAttribute", e))?;
        }
        if let Some(fill) = spec.fill {
            path.set_attribute("fill", fill.as_str()).map_err(|e| js_err("setAttribute", e))?;
        }
        self.listen(&path, spec.target, spec.listeners)?;
        parent.append_child(&path).map_err(|e| js_err("appendChild", e))?;
        Ok(path)
    }

    fn set_class(&mut self, handle: &Element, class: &str, on: bool) -> Result<(), TrigridError> {
        let list = handle.class_list();
        let res = if on { list.add_1(class) } else { list.remove_1(class) };
        res.map_err(|e| js_err("classList", e))
    }

    fn mount(&mut self, root: &Element, (w, h): (f64, f64)) -> Result<(), TrigridError> {
        if !self.is_ready() {
            return Err(TrigridError::SurfaceUnavailable("svg element is detached".into()));
        }
        self.svg
            .set_attribute("viewBox", &format!("0 0 {} {}", w, h))
            .map_err(|e| js_err("setAttribute", e))?;
        self.svg.append_child(root).map_err(|e| js_err("appendChild", e))?;
        Ok(())
    }
}
