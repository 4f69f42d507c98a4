//! React templates, one per component kind.
//!
//! Templates only place data; the class list, the `style={{ ... }}` block
//! and every literal text are computed before rendering.

/// Root-styled element with a text child.
pub(crate) const BUTTON: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <Button
      className="{{class_name}}"
{{indent style_attr 6}}
    >
      {{texts.label}}
    </Button>
  )
}
"#;

pub(crate) const CARD: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <Card
      className="{{class_name}}"
{{indent style_attr 6}}
    >
      <CardHeader>
        <CardTitle>{{texts.title}}</CardTitle>
      </CardHeader>
      <CardContent>
        <p>{{texts.description}}</p>
      </CardContent>
    </Card>
  )
}
"#;

pub(crate) const BADGE: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <Badge
      className="{{class_name}}"
{{indent style_attr 6}}
    >
      {{texts.label}}
    </Badge>
  )
}
"#;

pub(crate) const INPUT: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <Input
      type="text"
      placeholder="{{texts.placeholder}}"
      className="{{class_name}}"
{{indent style_attr 6}}
    />
  )
}
"#;

pub(crate) const AVATAR: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <Avatar
      className="{{class_name}}"
{{indent style_attr 6}}
    >
      <AvatarFallback>{{texts.fallback}}</AvatarFallback>
    </Avatar>
  )
}
"#;

pub(crate) const PROGRESS: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <Progress
      value={{value_expr}}
      className="{{class_name}}"
{{indent style_attr 6}}
    />
  )
}
"#;

pub(crate) const TOGGLE: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <div className="{{wrapper_class}}">
      <Switch
        id="{{element_id}}"
        className="{{class_name}}"
{{indent style_attr 8}}
      />
      <Label htmlFor="{{element_id}}">{{texts.label}}</Label>
    </div>
  )
}
"#;

pub(crate) const ALERT: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <Alert
      className="{{class_name}}"
{{indent style_attr 6}}
    >
      <AlertTitle>{{texts.title}}</AlertTitle>
      <AlertDescription>{{texts.description}}</AlertDescription>
    </Alert>
  )
}
"#;

/// Loading placeholder; the bars are rendered with [`SKELETON_BAR`] first.
pub(crate) const SKELETON: &str = r#"{{imports}}

export function {{pascal_case name}}() {
  return (
    <div className="{{wrapper_class}}">
{{indent parts 6}}
    </div>
  )
}
"#;

pub(crate) const SKELETON_BAR: &str = r#"<Skeleton
  className="{{class_name}}"
{{indent style_attr 2}}
/>"#;

/// Fallback for unknown kinds: a plain element, no imports.
pub(crate) const GENERIC: &str = r#"export function {{pascal_case name}}() {
  return (
    <div
      className="{{class_name}}"
{{indent style_attr 6}}
    >
      {{texts.label}}
    </div>
  )
}
"#;
