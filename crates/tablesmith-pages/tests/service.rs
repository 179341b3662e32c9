use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tablesmith_core::{ArtifactKind, Column, GenerationOptions, Markup, SqlType, Table};
use tablesmith_pages::{service_controller, stylesheet};

fn game() -> Table {
    Table::builder("Game")
        .column(Column::new("Id", SqlType::Int).primary_key().identity())
        .column(Column::new("Name", SqlType::NVarChar).length(50).nullable())
        .column(Column::new("Disabled", SqlType::Bit))
        .build()
        .unwrap()
}

#[test]
fn game_controller() {
    let pair = assert_ok!(service_controller(&game(), &GenerationOptions::default()));

    assert_eq!(pair.code.file_name(), "GameController.cs");
    assert_contains!(pair.code.body, "    public class GameController : Controller\n");
    assert_contains!(
        pair.code.body,
        r#"        public ActionResult Index()
        {
            return View("GameIndex", Dal.LoadAll());
        }

        public ActionResult Details(int id)
        {
            Game game = Dal.LoadSingle(id);
            if (game == null)
            {
                return HttpNotFound();
            }
            return Json(game, JsonRequestBehavior.AllowGet);
        }

        [HttpPost]
        public ActionResult Save(Game game)
        {
            Dal.Save(game);
            return RedirectToAction("Index");
        }

        [HttpPost]
        public ActionResult Delete(int id)
        {
            Dal.DeleteSingle(id);
            return RedirectToAction("Index");
        }
"#
    );
}

#[test]
fn game_index_view() {
    let pair = assert_ok!(service_controller(&game(), &GenerationOptions::default()));

    assert_eq!(pair.layout.kind, ArtifactKind::Markup(Markup::View));
    assert_eq!(pair.layout.file_name(), "GameIndex.cshtml");
    assert_eq!(
        pair.layout.body,
        r#"@model IEnumerable<Data.Game>

<h2>Game List</h2>

<table class="tablesmith-grid">
    <tr>
        <th>Id</th>
        <th>Name</th>
        <th>Disabled</th>
        <th></th>
    </tr>
@foreach (var item in Model)
{
    <tr>
        <td>@item.Id</td>
        <td>@item.Name</td>
        <td>@item.Disabled</td>
        <td>@Html.ActionLink("Details", "Details", new { id = item.Id })</td>
    </tr>
}
</table>
"#
    );
}

#[test]
fn keyless_controller_lists_only() {
    let table = Table::builder("Log")
        .column(Column::new("Message", SqlType::NVarChar).max())
        .build()
        .unwrap();

    let pair = assert_ok!(service_controller(&table, &GenerationOptions::default()));
    assert_contains!(pair.code.body, "return View(\"LogIndex\", Dal.LoadAll());");
    assert_contains!(
        pair.code.body,
        "// Details is not available: table [dbo].[Log] has no primary key."
    );
    assert!(!pair.code.body.contains("HttpPost"));
    assert!(!pair.layout.body.contains("ActionLink"));
}

#[test]
fn stylesheet_is_named_by_options() {
    let css = stylesheet(&GenerationOptions::default().stylesheet("arcade"));
    assert_eq!(css.file_name(), "arcade.css");
    assert_contains!(css.body, ".tablesmith-grid {\n");
}
