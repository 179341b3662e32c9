use super::Render;
use crate::{Control, DateMode, Pair};

use tablesmith_codegen::DalMethod;
use tablesmith_core::{procedure::SEARCH_STRING_LENGTH, BaseType, Result, Selection, SourceWriter};

/// Rows per grid page
const PAGE_SIZE: u32 = 50;

impl Render<'_> {
    /// Grid over every row. With search fields the grid pages through the
    /// search procedure instead of loading all rows.
    pub(crate) fn render_list(&self, selection: &Selection) -> Result<Pair> {
        let searchable = !self.table.resolve(&selection.search)?.is_empty();
        let grid = self.grid_id();
        let title = format!("{} List", self.names.display_name);

        let content = |w: &mut SourceWriter| {
            w.line("<div class=\"tablesmith-list\">");
            w.indented(|w| {
                w.line(format!("<h1>{title}</h1>"));

                if searchable {
                    w.line("<div class=\"tablesmith-search\">");
                    w.indented(|w| {
                        w.line(format!(
                            "<asp:TextBox ID=\"SearchTextBox\" runat=\"server\" MaxLength=\"{SEARCH_STRING_LENGTH}\" />"
                        ));
                        w.line("<asp:Button ID=\"SearchButton\" runat=\"server\" Text=\"Search\" OnClick=\"SearchButton_Click\" />");
                    });
                    w.line("</div>");
                }

                let custom_paging = if searchable { " AllowCustomPaging=\"true\"" } else { "" };
                w.line(format!(
                    "<asp:GridView ID=\"{grid}\" runat=\"server\" CssClass=\"tablesmith-grid\" AutoGenerateColumns=\"false\" AllowPaging=\"true\"{custom_paging} PageSize=\"{PAGE_SIZE}\" OnPageIndexChanging=\"{grid}_PageIndexChanging\">"
                ));
                w.indented(|w| {
                    w.line("<Columns>");
                    w.indented(|w| self.grid_columns(w));
                    w.line("</Columns>");
                });
                w.line("</asp:GridView>");
            });
            w.line("</div>");
        };

        Ok(self.web_pair("List", &title, content, self.list_code(searchable)))
    }

    fn grid_id(&self) -> String {
        format!("{}Grid", self.names.class_name)
    }

    fn grid_columns(&self, w: &mut SourceWriter) {
        if self.table.has_primary_key() {
            let keys: Vec<_> = self.key_fields().map(|field| field.names.property.as_str()).collect();
            let query = keys
                .iter()
                .enumerate()
                .map(|(i, key)| format!("{key}={{{i}}}"))
                .collect::<Vec<_>>()
                .join("&amp;");

            w.line(format!(
                "<asp:HyperLinkField Text=\"Edit\" DataNavigateUrlFields=\"{}\" DataNavigateUrlFormatString=\"{}?{query}\" />",
                keys.join(","),
                self.page_url("Edit")
            ));
        }

        for field in self.rendered() {
            let property = &field.names.property;
            let header = &field.names.display;

            let line = match field.control {
                _ if field.column.base_type() == BaseType::Bool => format!(
                    "<asp:CheckBoxField DataField=\"{property}\" HeaderText=\"{header}\" />"
                ),
                Control::Date(mode) if mode != DateMode::Time => format!(
                    "<asp:BoundField DataField=\"{property}\" HeaderText=\"{header}\" DataFormatString=\"{{0:{}}}\" />",
                    mode.format()
                ),
                _ => format!("<asp:BoundField DataField=\"{property}\" HeaderText=\"{header}\" />"),
            };
            w.line(line);
        }
    }

    fn list_code(&self, searchable: bool) -> String {
        let grid = self.grid_id();
        let mut w = SourceWriter::new();

        self.open_code_behind(&mut w, "List", &format!("Lists the rows of {}", self.names.qualified));
        w.blank();

        w.block("protected void Page_Load(object sender, EventArgs e)", |w| {
            w.block("if (!IsPostBack)", |w| {
                w.line("BindGrid();");
            });
        });
        w.blank();

        if searchable {
            w.block("protected void SearchButton_Click(object sender, EventArgs e)", |w| {
                w.line(format!("{grid}.PageIndex = 0;"));
                w.line("BindGrid();");
            });
            w.blank();
        }

        w.block(
            format!("protected void {grid}_PageIndexChanging(object sender, GridViewPageEventArgs e)"),
            |w| {
                w.line(format!("{grid}.PageIndex = e.NewPageIndex;"));
                w.line("BindGrid();");
            },
        );
        w.blank();

        w.block("private void BindGrid()", |w| {
            if searchable {
                let search = "search".to_string();
                let skip = format!("{grid}.PageIndex * {grid}.PageSize");
                let take = format!("{grid}.PageSize");

                w.line("string search = SearchTextBox.Text.Length == 0 ? null : SearchTextBox.Text;");
                w.line(format!(
                    "{grid}.VirtualItemCount = {};",
                    self.call(DalMethod::CountSearch, &[search.clone()])
                ));
                w.line(format!(
                    "{grid}.DataSource = {};",
                    self.call(DalMethod::LoadAllPaged, &[skip, take, search])
                ));
            } else {
                w.line(format!("{grid}.DataSource = {};", self.call(DalMethod::LoadAll, &[])));
            }
            w.line(format!("{grid}.DataBind();"));
        });

        w.close();
        w.close();
        w.finish()
    }
}
