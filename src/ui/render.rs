use crate::todos::validate_props;
use crate::ui::add_todo::AddTodo;
use crate::ui::app::App;
use crate::ui::editor::Focus;
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::todo_list::TodoList;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let props = app.props();
    let editor = app.editor();

    debug_assert!(
        validate_props(&props).is_ok(),
        "root props violate the render contract: {:?}",
        validate_props(&props)
    );

    let add_todo = AddTodo::new(&editor.draft, editor.focus == Focus::Input);
    frame.render_widget(add_todo.widget(), header);

    frame.render_widget(Clear, body);
    let list = TodoList::new(
        &props.visible_todos,
        editor.selected,
        editor.focus == Focus::List,
    );
    let mut list_state = list.state();
    frame.render_stateful_widget(list.widget(), body, &mut list_state);

    frame.render_widget(Footer::new(props.visibility_filter).widget(footer), footer);

    if let Some(position) = add_todo.cursor(header) {
        frame.set_cursor_position(position);
    }
}
